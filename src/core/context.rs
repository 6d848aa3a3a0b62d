use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use crate::catalog::domain::SharedCatalog;
use crate::catalog::factory::{create_library, create_sample_library};
use crate::core::command::CommandError;
use crate::core::domain::{Configuration, Counters};
use crate::core::library::{LibraryError, LibraryResult};

// AppState is what every console controller receives: the config, the one shared catalog
// and the process wide counters.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog: SharedCatalog,
    pub(crate) counters: Arc<Counters>,
}

impl AppState {
    pub fn new(library_name: &str) -> AppState {
        let config = Configuration::new(library_name);
        let counters = Arc::new(Counters::new());
        let catalog = create_library(&config, &counters);
        AppState {
            config,
            catalog,
            counters,
        }
    }

    pub fn with_sample(library_name: &str) -> LibraryResult<AppState> {
        let config = Configuration::new(library_name);
        let counters = Arc::new(Counters::new());
        let catalog = create_sample_library(&config, &counters)?;
        Ok(AppState {
            config,
            catalog,
            counters,
        })
    }
}

// ConsoleError is a rejected console action with the message shown to the user.
#[derive(Debug, PartialEq)]
pub(crate) struct ConsoleError {
    pub(crate) kind: &'static str,
    pub(crate) message: String,
}

impl ConsoleError {
    pub fn new(kind: &'static str, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

pub(crate) type ConsoleResult = Result<String, ConsoleError>;

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { .. } => {
                ConsoleError::new("invalid input", err.message())
            }
            CommandError::NotFound { .. } => {
                ConsoleError::new("not found", err.message())
            }
            CommandError::DuplicateKey { .. } => {
                ConsoleError::new("already exists", err.message())
            }
            CommandError::Unavailable { .. } => {
                ConsoleError::new("unavailable", err.message())
            }
            CommandError::Conflict { .. } => {
                ConsoleError::new("refused", err.message())
            }
            CommandError::Serialization { .. } => {
                ConsoleError::new("bad data", err.message())
            }
            CommandError::Runtime { .. } => {
                ConsoleError::new("failed", err.message())
            }
        }
    }
}

impl From<LibraryError> for ConsoleError {
    fn from(err: LibraryError) -> Self {
        ConsoleError::from(CommandError::from(err))
    }
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "✗ {}: {}", self.kind, self.message)
    }
}
