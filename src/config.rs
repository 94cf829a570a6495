use crate::interfaces::messages::Messages;
use clap::ValueEnum;

/// Language of every prompt and message the program prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Brazilian Portuguese
    Pt,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &Messages::EN,
            Locale::Pt => &Messages::PT,
        }
    }
}

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub locale: Locale,
}

impl Settings {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }
}
