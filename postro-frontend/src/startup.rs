//! Startup phase configuration.
use std::borrow::Cow;

use crate::{OptionalStr, auth, postgres::frontend::Startup};

/// A config for postgres startup phase.
///
/// <https://www.postgresql.org/docs/current/protocol-flow.html#PROTOCOL-FLOW-START-UP>
#[derive(Clone, Debug)]
pub struct StartupConfig<'a> {
    user: Cow<'a,str>,
    database: Option<Cow<'a,str>>,
    password: Option<Cow<'a,str>>,
}

impl<'a> StartupConfig<'a> {
    /// Create new config, the database user name is required.
    pub fn new(user: impl Into<Cow<'a, str>>) -> Self {
        Self { user: user.into(), database: None, password: None }
    }

    /// The database user name to connect as.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The database to connect to. Defaults to the user name.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// The database to connect to. Defaults to the user name.
    pub fn set_database(mut self, database: impl Into<Cow<'a,str>>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Authentication password, the default is empty string.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Authentication password, the default is empty string.
    pub fn set_password(mut self, password: impl Into<Cow<'a,str>>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Returns the [`Startup`] message for current config.
    pub fn startup(&self) -> Startup<'_> {
        Startup {
            user: &self.user,
            database: OptionalStr::new(self.database()),
        }
    }

    /// Returns the password response for `AuthenticationMD5Password` with given `salt`.
    pub fn md5_response(&self, salt: [u8; 4]) -> String {
        auth::md5_password(&self.user, self.password().unwrap_or(""), salt)
    }
}

/// Builder for [`StartupConfig`].
pub struct StartupConfigBuilder<'a> {
    config: StartupConfig<'a>,
}

impl<'a> StartupConfigBuilder<'a> {
    /// Create new config builder, the database user name is required.
    pub fn new(user: impl Into<Cow<'a, str>>) -> Self {
        Self { config: StartupConfig::new(user) }
    }

    /// The database to connect to. Defaults to the user name.
    pub fn database(mut self, database: impl Into<Cow<'a,str>>) -> Self {
        self.config.database = Some(database.into());
        self
    }

    /// Authentication password, the default is empty string.
    pub fn password(mut self, password: impl Into<Cow<'a,str>>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Finish builder, returns [`StartupConfig`].
    pub fn build(self) -> StartupConfig<'a> {
        self.config
    }
}

impl<'a> From<StartupConfigBuilder<'a>> for StartupConfig<'a> {
    fn from(value: StartupConfigBuilder<'a>) -> Self {
        value.config
    }
}
