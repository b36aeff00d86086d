use crate::config::Config;
use crate::models::Manager;
use crate::shells::GridShell;
use tokio::time::{sleep_until, Instant};

impl<C: Config, SHELL: GridShell> Manager<C, SHELL> {
    /// Drive the reorder core against the host: drain change notifications
    /// and fire the debounced redisplay, until a shutdown event arrives.
    ///
    /// Everything runs on this one task; the debounce deadline is the only
    /// suspension point besides waiting on the host.
    pub async fn event_loop(mut self) {
        let mut event_buffer = vec![];
        loop {
            for event in event_buffer.drain(..) {
                self.grid_event_handler(event);
            }

            if self.shutdown_requested {
                // Cancel the pending timer before state goes away.
                self.teardown();
                break;
            }

            self.shell.flush();

            let deadline = self.state.pending_redisplay;
            tokio::select! {
                _ = self.shell.wait_readable() => {
                    event_buffer.append(&mut self.shell.get_next_events());
                }
                () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.redisplay_handler();
                }
            }
        }
    }
}
