// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Relaunch notifications.
//!
//! A running application can be asked to come to the foreground again with
//! fresh launch parameters. The bus runtime delivers that request through a
//! native callback; this module gives the callback an explicit, typed
//! channel registered once at startup instead of process-wide mutable
//! handler state. The payload is the raw launch-parameters string.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// Sending side handed to the bus callback. Clonable and callback-safe.
#[derive(Clone)]
pub struct RelaunchHandle {
    tx: Sender<String>,
}

impl RelaunchHandle {
    /// Delivers a relaunch request carrying `parameters`. Delivery to a
    /// torn-down receiver is silently dropped, matching process shutdown.
    pub fn notify(&self, parameters: String) {
        let _ = self.tx.send(parameters);
    }
}

/// Receiving side polled by the engine's event loop.
pub struct RelaunchEvents {
    rx: Receiver<String>,
}

impl RelaunchEvents {
    /// Returns the next pending relaunch payload without blocking.
    pub fn try_next(&self) -> Option<String> {
        match self.rx.try_recv() {
            Ok(parameters) => Some(parameters),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Creates the relaunch channel; call once at startup.
pub fn relaunch_channel() -> (RelaunchHandle, RelaunchEvents) {
    let (tx, rx) = channel();
    (RelaunchHandle { tx }, RelaunchEvents { rx })
}
