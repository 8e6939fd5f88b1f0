// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::DocumentStorage;

/// Shared application state: initialized document storage plus the resolved
/// configuration. Requests share no other mutable state.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<DocumentStorage>,
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(storage: DocumentStorage, config: ServerConfig) -> Self {
        Self {
            storage: Arc::new(storage),
            config: Arc::new(config),
        }
    }

    pub fn storage(&self) -> &DocumentStorage {
        &self.storage
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
