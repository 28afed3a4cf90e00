use std::sync::{ Arc, Mutex };
use lazy_static::lazy_static;
use crate::util::message::{ Message, MessageLevel };

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Severity {
    Notice,
    Warning,
    Error
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Verbosity {
    Noisy,
    Normal,
    Quiet
}

impl Verbosity {
    pub fn from_string(str: &str) -> Option<Verbosity> {
        match str {
            "quiet" => Some(Verbosity::Quiet),
            "noisy" => Some(Verbosity::Noisy),
            "normal" => Some(Verbosity::Normal),
            _ => None
        }
    }

    fn level(&self) -> usize {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Noisy => 2
        }
    }
}

type Printer = Box<dyn FnMut(&Severity,&str) + 'static + Send>;

lazy_static! {
    static ref VERBOSITY : Arc<Mutex<Verbosity>> = Arc::new(Mutex::new(Verbosity::Normal));
    static ref PRINTER : Arc<Mutex<Option<Printer>>> = Arc::new(Mutex::new(None));
}

macro_rules! lock {
    ($x: expr) => {{
        match $x.lock() {
            Ok(v) => v,
            Err(e) => e.into_inner()
        }
    }}
}

pub fn set_verbosity(verbosity: Verbosity) {
    *lock!(VERBOSITY) = verbosity;
}

pub fn verbosity() -> Verbosity { *lock!(VERBOSITY) }

pub fn set_printer<F>(cb: F) where F: FnMut(&Severity,&str) + 'static + Send {
    *lock!(PRINTER) = Some(Box::new(cb));
}

/* routes to the browser console; only meaningful on wasm32 */
pub fn console_printer() -> impl FnMut(&Severity,&str) + 'static + Send {
    |severity: &Severity, message: &str| {
        let value = wasm_bindgen::JsValue::from_str(message);
        match severity {
            Severity::Notice => web_sys::console::log_1(&value),
            Severity::Warning => web_sys::console::warn_1(&value),
            Severity::Error => web_sys::console::error_1(&value)
        }
    }
}

/* Don't call directly, use macros */
pub fn print(verbosity: &Verbosity, severity: &Severity, message: &str) {
    if verbosity.level() > lock!(VERBOSITY).level() { return; }
    if let Some(printer) = lock!(PRINTER).as_mut() {
        printer(severity,message);
    }
}

pub(crate) fn severity_of(message: &Message) -> Severity {
    match message.level() {
        MessageLevel::Warn => Severity::Warning,
        MessageLevel::Error => Severity::Error
    }
}

pub(crate) fn report(message: &Message) {
    print(&Verbosity::Normal,&severity_of(message),&message.to_string());
}

#[macro_export]
macro_rules! do_log {
    ($verb:tt,$sev:tt,$($arg:tt)*) => {{
        use $crate::console::{ print, Verbosity, Severity };
        print(&Verbosity::$verb,&Severity::$sev,&std::format!($($arg)*));
    }}
}

#[macro_export]
macro_rules! log { ($($arg:tt)*) => { $crate::do_log!(Normal,Notice,$($arg)*) } }
#[macro_export]
macro_rules! log_extra { ($($arg:tt)*) => { $crate::do_log!(Noisy,Notice,$($arg)*) } }
#[macro_export]
macro_rules! warn { ($($arg:tt)*) => { $crate::do_log!(Normal,Warning,$($arg)*) } }
#[macro_export]
macro_rules! error { ($($arg:tt)*) => { $crate::do_log!(Normal,Error,$($arg)*) } }
#[macro_export]
macro_rules! error_important { ($($arg:tt)*) => { $crate::do_log!(Quiet,Error,$($arg)*) } }
