use std::fmt::{ self, Display };
use crate::util::config::ConfigError;

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum MessageLevel {
    Warn,
    Error
}

#[derive(Clone,Debug,PartialEq)]
pub enum Message {
    CompileError(String),
    LinkError(String),
    UnknownType(u32),
    BadUniformValue(String),
    NoSuchVariable(String),
    WebGLFailure(String),
    SourceUnavailable(String),
    ConfusedWebBrowser(String),
    ConfigError(ConfigError)
}

impl Message {
    /* A missing source only loses one stage: the caller may try again with other source */
    pub fn level(&self) -> MessageLevel {
        match self {
            Message::CompileError(_) => MessageLevel::Error,
            Message::SourceUnavailable(_) => MessageLevel::Warn,
            Message::BadUniformValue(_) => MessageLevel::Warn,
            Message::NoSuchVariable(_) => MessageLevel::Warn,
            Message::LinkError(_) => MessageLevel::Error,
            Message::UnknownType(_) => MessageLevel::Error,
            Message::WebGLFailure(_) => MessageLevel::Error,
            Message::ConfusedWebBrowser(_) => MessageLevel::Error,
            Message::ConfigError(_) => MessageLevel::Error
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Message::CompileError(log) => format!("shader compile failed: {}",log),
            Message::LinkError(log) => format!("program link failed: {}",log),
            Message::UnknownType(code) => format!("no setter for GL type 0x{:04x}",code),
            Message::BadUniformValue(s) => format!("bad uniform value: {}",s),
            Message::NoSuchVariable(s) => format!("no such variable: {}",s),
            Message::WebGLFailure(s) => format!("WebGL failure: {}",s),
            Message::SourceUnavailable(s) => format!("shader source unavailable: {}",s),
            Message::ConfusedWebBrowser(s) => format!("unexpected browser behaviour: {}",s),
            Message::ConfigError(e) => format!("config error: {:?}",e)
        };
        write!(f,"{}",s)
    }
}

impl From<ConfigError> for Message {
    fn from(e: ConfigError) -> Message { Message::ConfigError(e) }
}
