/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by an update; the app runner executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
    RequestRender,

    /// Stop the event loop
    Quit,

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands: Vec<Cmd> = commands
            .into_iter()
            .filter(|cmd| *cmd != Cmd::None)
            .collect();
        match commands.len() {
            0 => Cmd::None,
            1 => commands.remove(0),
            _ => Cmd::Batch(commands),
        }
    }

    /// Flatten nested batches into execution order, dropping `Cmd::None`.
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => vec![],
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
