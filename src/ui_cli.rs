use std::io::{self, BufRead, Write};

use crate::i18n::{keys, Translator};
use crate::pump::{Field, RawPumpInput};
use crate::source::{InputSource, SourceError};

/// 터미널 대화형 입력. 항목마다 프롬프트를 띄우고 입력한 줄을 그대로 담는다.
/// 빈 줄은 기본값 사용으로 해석되며, 숫자 검증은 하지 않는다.
pub struct PromptSource<'a, R, W> {
    tr: &'a Translator,
    input: R,
    output: W,
}

impl<'a> PromptSource<'a, io::StdinLock<'static>, io::Stdout> {
    /// 표준 입출력을 사용하는 수집기.
    pub fn stdio(tr: &'a Translator) -> Self {
        Self::new(tr, io::stdin().lock(), io::stdout())
    }
}

impl<'a, R: BufRead, W: Write> PromptSource<'a, R, W> {
    pub fn new(tr: &'a Translator, input: R, output: W) -> Self {
        Self { tr, input, output }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, SourceError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> InputSource for PromptSource<'_, R, W> {
    fn collect(&mut self) -> Result<RawPumpInput, SourceError> {
        writeln!(self.output, "{}", self.tr.t(keys::APP_BANNER))?;
        let mut raw = RawPumpInput::new();
        for field in Field::ALL {
            let prompt = self.tr.prompt(field).to_string();
            let line = self.read_line(&prompt)?;
            raw.set(field, line);
        }
        Ok(raw)
    }
}
