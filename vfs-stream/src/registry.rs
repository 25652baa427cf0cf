use lazy_static::lazy_static;

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use vfs_error::{Result, VfsError};

use crate::handler::StreamHandler;

lazy_static! {
    static ref HANDLERS: RwLock<HashMap<String, Arc<dyn StreamHandler>>> =
        RwLock::new(HashMap::new());
}

/// Associate `scheme` with `handler` so that `scheme://…` targets
/// dispatch to it. Registering a scheme that is already taken is an
/// error; the scheme must be [`unregister`]ed first.
pub fn register(
    scheme: &str,
    handler: Arc<dyn StreamHandler>,
) -> Result<()> {
    let mut handlers = HANDLERS.write().map_err(|_| {
        VfsError::Other(anyhow::anyhow!("Failed to lock handler registry"))
    })?;

    if handlers.contains_key(scheme) {
        return Err(VfsError::Scheme(format!(
            "scheme `{}` is already registered",
            scheme
        )));
    }

    handlers.insert(scheme.to_owned(), handler);
    log::info!("Handler registered for scheme `{}`", scheme);
    Ok(())
}

/// Release `scheme` so it can be registered again.
pub fn unregister(scheme: &str) -> Result<()> {
    let mut handlers = HANDLERS.write().map_err(|_| {
        VfsError::Other(anyhow::anyhow!("Failed to lock handler registry"))
    })?;

    handlers.remove(scheme).ok_or_else(|| {
        VfsError::Scheme(format!("scheme `{}` is not registered", scheme))
    })?;

    log::info!("Handler unregistered for scheme `{}`", scheme);
    Ok(())
}

/// Whether a handler is currently registered for `scheme`.
pub fn is_registered(scheme: &str) -> bool {
    HANDLERS
        .read()
        .map(|handlers| handlers.contains_key(scheme))
        .unwrap_or(false)
}

/// Look up the handler serving `scheme`.
pub fn resolve(scheme: &str) -> Result<Arc<dyn StreamHandler>> {
    let handlers = HANDLERS.read().map_err(|_| {
        VfsError::Other(anyhow::anyhow!("Failed to lock handler registry"))
    })?;

    handlers.get(scheme).cloned().ok_or_else(|| {
        VfsError::Scheme(format!(
            "no handler registered for scheme `{}`",
            scheme
        ))
    })
}

/// Every scheme with a registered handler, in no particular order.
pub fn registered_schemes() -> Vec<String> {
    HANDLERS
        .read()
        .map(|handlers| handlers.keys().cloned().collect())
        .unwrap_or_default()
}
