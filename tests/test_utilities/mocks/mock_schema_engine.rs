use cyclonedx_lib::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock XmlSchemaEngine for testing
///
/// Accepts every document unless it contains `reject_marker`, and counts how
/// often a schema was compiled.
pub struct MockSchemaEngine {
    pub reject_marker: Option<String>,
    pub compile_failure: Option<String>,
    compilations: AtomicUsize,
}

impl MockSchemaEngine {
    pub fn new() -> Self {
        Self {
            reject_marker: None,
            compile_failure: None,
            compilations: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(marker: &str) -> Self {
        Self {
            reject_marker: Some(marker.to_string()),
            ..Self::new()
        }
    }

    pub fn with_compile_failure(details: &str) -> Self {
        Self {
            compile_failure: Some(details.to_string()),
            ..Self::new()
        }
    }

    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::SeqCst)
    }
}

struct MockCompiledSchema {
    reject_marker: Option<String>,
}

impl CompiledXmlSchema for MockCompiledSchema {
    fn validate(&self, document: &str) -> Option<String> {
        match &self.reject_marker {
            Some(marker) if document.contains(marker.as_str()) => {
                Some(format!("element '{}' is not allowed here", marker))
            }
            _ => None,
        }
    }
}

impl XmlSchemaEngine for MockSchemaEngine {
    fn compile(&self, xsd: &str) -> Result<Box<dyn CompiledXmlSchema>, String> {
        self.compilations.fetch_add(1, Ordering::SeqCst);
        if let Some(details) = &self.compile_failure {
            return Err(details.clone());
        }
        if !xsd.contains("targetNamespace") {
            return Err("schema has no target namespace".to_string());
        }
        Ok(Box::new(MockCompiledSchema {
            reject_marker: self.reject_marker.clone(),
        }))
    }
}
