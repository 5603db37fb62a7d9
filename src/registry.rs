use rustc_hash::FxHashSet;

use crate::error::RegistrationError;
use crate::log::log_console;

/// A host-side table of processor names, like the worklet global scope's
/// `registerProcessor`.
pub trait ProcessorRegistry {
    fn register(&mut self, name: &str) -> Result<(), RegistrationError>;
}

/// Register `name`, treating "already registered" as success.
///
/// Every other failure is returned unchanged; there is no retry and no
/// fallback name.
pub fn register_processor<R>(registry: &mut R, name: &str) -> Result<(), RegistrationError>
where
    R: ProcessorRegistry + ?Sized,
{
    match registry.register(name) {
        Ok(()) => Ok(()),
        Err(RegistrationError::AlreadyRegistered { name }) => {
            log_console(&format!("Processor '{}' already registered, reusing it", name));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Registry that rejects duplicates and empty names, as the browser does.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    names: FxHashSet<String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ProcessorRegistry for InMemoryRegistry {
    fn register(&mut self, name: &str) -> Result<(), RegistrationError> {
        if name.is_empty() {
            return Err(RegistrationError::InvalidName {
                name: name.to_string(),
            });
        }
        if !self.names.insert(name.to_string()) {
            return Err(RegistrationError::AlreadyRegistered {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
