/// Intents posted to the console loop from background tasks
///
/// Background tasks never touch habit data. They only send an `Intent`; the
/// console loop applies it on its own task, one at a time.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Something a background task wants the interactive loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Bring the habit list back into view
    ///
    /// Nothing in the console binary sends this; it is the entry point for
    /// a tray icon or window host that embeds the session.
    Show,
    /// Leave the interactive loop
    Quit,
}

/// Create the intent channel
pub fn channel() -> (mpsc::Sender<Intent>, mpsc::Receiver<Intent>) {
    mpsc::channel(16)
}

/// Post `Intent::Quit` when the process receives Ctrl-C
pub fn spawn_interrupt_watcher(sender: mpsc::Sender<Intent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received, asking console to quit");
                let _ = sender.send(Intent::Quit).await;
            }
            Err(e) => tracing::warn!("Unable to listen for Ctrl-C: {}", e),
        }
    })
}
