use crate::config::Config;
use crate::shells::GridShell;
use crate::state::State;

/// Maintains current extension state.
///
/// One manager exists per activation; dropping it ends the activation.
#[derive(Debug)]
pub struct Manager<C, SHELL> {
    pub state: State,
    pub config: C,
    pub shell: SHELL,

    pub(crate) shutdown_requested: bool,
}

impl<C, SHELL> Manager<C, SHELL>
where
    C: Config,
    SHELL: GridShell,
{
    pub fn new(config: C) -> Self {
        let shell = SHELL::new(&config);

        Self {
            state: State::new(&config),
            config,
            shell,
            shutdown_requested: false,
        }
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::shells::MockGridShell> {
    pub fn new_test(folder_children: Vec<String>) -> Self {
        Self::new(crate::config::tests::TestConfig {
            folder_children,
            ..Default::default()
        })
    }
}
