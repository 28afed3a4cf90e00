use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::Debug;
use lazy_static::lazy_static;
use web_sys::WebGlRenderingContext;
use crate::console::Verbosity;
use crate::util::message::Message;

#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub enum ConfigError {
    UnknownConfigKey(String),
    BadConfigValue(String,String),
    WrongValueType(String)
}

pub trait ConfigValue : Sized {
    fn parse(&self, value_str: &str) -> Result<Self,String>;
}

pub struct ConfigKeyInfo<'a,K,V> {
    pub key: K,
    pub name: &'a str,
    pub default: &'a V
}

pub struct Config<'a,K,V> where K: PartialEq+Eq+Hash, V: ConfigValue + Clone {
    str_to_key: HashMap<String,K>,
    defaults: HashMap<K,&'a V>,
    values: HashMap<K,V>
}

impl<'a,K: Debug+Clone+PartialEq+Eq+Hash, V: ConfigValue+Clone> Config<'a,K,V> {
    pub fn new(info: &[ConfigKeyInfo<'a,K,V>]) -> Config<'a,K,V> {
        let mut str_to_key = HashMap::new();
        let mut defaults = HashMap::new();
        for info in info.iter() {
            str_to_key.insert(info.name.to_string(),info.key.clone());
            defaults.insert(info.key.clone(),info.default);
        }
        Config {
            str_to_key,
            defaults,
            values: HashMap::new()
        }
    }

    pub fn set(&mut self, key_str: &str, value_str: &str) -> Result<(),ConfigError> {
        let key = self.str_to_key.get(key_str)
            .ok_or_else(|| ConfigError::UnknownConfigKey(key_str.to_string()))?;
        let default = self.defaults.get(key)
            .ok_or_else(|| ConfigError::UnknownConfigKey(key_str.to_string()))?;
        let value = default.parse(value_str).map_err(|e| {
            ConfigError::BadConfigValue(key_str.to_string(),e)
        })?;
        self.values.insert(key.clone(),value);
        Ok(())
    }

    pub fn get(&self, key: &K) -> Result<&V,ConfigError> {
        if let Some(v) = self.values.get(key) { return Ok(v); }
        if let Some(v) = self.defaults.get(key) { return Ok(v); }
        Err(ConfigError::UnknownConfigKey(format!("{:?}",key)))
    }
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum TextureFilter {
    Linear,
    Nearest
}

impl TextureFilter {
    pub fn gl_value(&self) -> u32 {
        match self {
            TextureFilter::Linear => WebGlRenderingContext::LINEAR,
            TextureFilter::Nearest => WebGlRenderingContext::NEAREST
        }
    }
}

#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub enum GlConfigKey {
    Verbosity,
    CheckErrors,
    TextureFilter
}

#[derive(Clone,Debug,PartialEq)]
pub enum GlConfigValue {
    Verbosity(Verbosity),
    Boolean(bool),
    Filter(TextureFilter)
}

lazy_static! {
    static ref CONFIG_CONFIG : Vec<ConfigKeyInfo<'static,GlConfigKey,GlConfigValue>> = {
        vec![
            ConfigKeyInfo { key: GlConfigKey::Verbosity, name: "console.verbosity", default: &GlConfigValue::Verbosity(Verbosity::Normal) },
            ConfigKeyInfo { key: GlConfigKey::CheckErrors, name: "gl.check-errors", default: &GlConfigValue::Boolean(true) },
            ConfigKeyInfo { key: GlConfigKey::TextureFilter, name: "texture.filter", default: &GlConfigValue::Filter(TextureFilter::Linear) },
        ]};
}

impl ConfigValue for GlConfigValue {
    fn parse(&self, value_str: &str) -> Result<GlConfigValue,String> {
        Ok(match self {
            GlConfigValue::Verbosity(_) => {
                GlConfigValue::Verbosity(Verbosity::from_string(value_str)
                    .ok_or_else(|| format!("expected quiet, normal or noisy, got '{}'",value_str))?)
            },
            GlConfigValue::Boolean(_) => {
                GlConfigValue::Boolean(value_str.parse().map_err(|e: std::str::ParseBoolError| e.to_string())?)
            },
            GlConfigValue::Filter(_) => {
                GlConfigValue::Filter(match value_str {
                    "linear" => TextureFilter::Linear,
                    "nearest" => TextureFilter::Nearest,
                    _ => { return Err(format!("expected linear or nearest, got '{}'",value_str)); }
                })
            }
        })
    }
}

pub struct GlConfig(Config<'static,GlConfigKey,GlConfigValue>);

impl GlConfig {
    pub fn new() -> GlConfig {
        GlConfig(Config::new(&CONFIG_CONFIG))
    }

    pub fn set(&mut self, key_str: &str, value: &str) -> Result<(),Message> {
        self.0.set(key_str,value).map_err(|e| Message::ConfigError(e))
    }

    fn wrong_type(key: &GlConfigKey) -> Message {
        Message::ConfigError(ConfigError::WrongValueType(format!("{:?}",key)))
    }

    pub fn verbosity(&self) -> Result<Verbosity,Message> {
        match self.0.get(&GlConfigKey::Verbosity)? {
            GlConfigValue::Verbosity(v) => Ok(*v),
            _ => Err(GlConfig::wrong_type(&GlConfigKey::Verbosity))
        }
    }

    pub fn check_errors(&self) -> Result<bool,Message> {
        match self.0.get(&GlConfigKey::CheckErrors)? {
            GlConfigValue::Boolean(v) => Ok(*v),
            _ => Err(GlConfig::wrong_type(&GlConfigKey::CheckErrors))
        }
    }

    pub fn texture_filter(&self) -> Result<TextureFilter,Message> {
        match self.0.get(&GlConfigKey::TextureFilter)? {
            GlConfigValue::Filter(v) => Ok(*v),
            _ => Err(GlConfig::wrong_type(&GlConfigKey::TextureFilter))
        }
    }
}
