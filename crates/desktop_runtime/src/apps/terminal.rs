//! Terminal easter egg: a tiny command interpreter plus its window view.

use leptos::*;

use super::{app_descriptor, desktop_icon_apps};
use crate::{
    host::window_primary_input_dom_id,
    model::{AppId, WindowId},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

const HISTORY_LIMIT: usize = 100;
const WELCOME: &str = "portfolio shell. type `help` to list commands.";

/// Desktop side effect requested by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    Open(AppId),
    Reveal,
    Clear,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub action: Option<TerminalAction>,
}

impl CommandOutput {
    fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            action: None,
        }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines([line.into()])
    }

    fn with_action(mut self, action: TerminalAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Interprets one command line.
pub fn run_command(input: &str, hidden_revealed: bool) -> CommandOutput {
    let mut words = input.split_whitespace();
    let Some(command) = words.next() else {
        return CommandOutput::default();
    };
    let args: Vec<&str> = words.collect();

    match command {
        "help" => CommandOutput::lines([
            "help          show this list",
            "ls            list applications",
            "open <app>    open an application",
            "whoami        print the current user",
            "echo <text>   print text",
            "clear         clear the screen",
            "exit          close the terminal",
        ]),
        "ls" => CommandOutput::lines(
            desktop_icon_apps(hidden_revealed)
                .into_iter()
                .map(|descriptor| descriptor.app_id.slug()),
        ),
        "open" => open_command(&args, hidden_revealed),
        "whoami" => CommandOutput::line("guest"),
        "echo" => CommandOutput::line(args.join(" ")),
        "clear" => CommandOutput::default().with_action(TerminalAction::Clear),
        "exit" => CommandOutput::default().with_action(TerminalAction::Exit),
        "reveal" if hidden_revealed => CommandOutput::line("nothing left to reveal."),
        "reveal" => CommandOutput::line("something appeared on the desktop...")
            .with_action(TerminalAction::Reveal),
        "sudo" => CommandOutput::line("guest is not in the sudoers file. This incident will be reported."),
        other => CommandOutput::line(format!("{other}: command not found")),
    }
}

fn open_command(args: &[&str], hidden_revealed: bool) -> CommandOutput {
    let [name] = args else {
        return CommandOutput::line("usage: open <app>");
    };
    let visible = AppId::from_slug(name)
        .and_then(|app_id| app_descriptor(app_id).ok())
        .filter(|descriptor| descriptor.visible_on_desktop(hidden_revealed));
    match visible {
        Some(descriptor) => CommandOutput::line(format!("opening {}...", descriptor.title))
            .with_action(TerminalAction::Open(descriptor.app_id)),
        None => CommandOutput::line(format!("open: {name}: no such application")),
    }
}

/// Session-only command recall for the up/down arrow keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn push(&mut self, command: &str) {
        self.cursor = None;
        let command = command.trim();
        if command.is_empty() || self.entries.last().map(String::as_str) == Some(command) {
            return;
        }
        self.entries.push(command.to_string());
        if self.entries.len() > HISTORY_LIMIT {
            let overflow = self.entries.len() - HISTORY_LIMIT;
            self.entries.drain(0..overflow);
        }
    }

    /// Steps back one entry, stopping at the oldest.
    pub fn previous(&mut self) -> Option<&str> {
        let index = match self.cursor {
            Some(index) => index.saturating_sub(1),
            None => self.entries.len().checked_sub(1)?,
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Steps forward one entry. Past the newest entry, recall ends with an empty line.
    pub fn next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TerminalLine {
    Prompt(String),
    Output(String),
}

#[component]
pub(super) fn TerminalApp(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let transcript = create_rw_signal(vec![TerminalLine::Output(WELCOME.to_string())]);
    let input = create_rw_signal(String::new());
    let history = store_value(CommandHistory::default());

    let submit = move || {
        let command = input.get_untracked();
        input.set(String::new());
        history.update_value(|history| history.push(&command));

        let revealed = runtime.state.with_untracked(|desktop| desktop.hidden_revealed);
        let output = run_command(&command, revealed);
        transcript.update(|lines| {
            lines.push(TerminalLine::Prompt(command));
            lines.extend(output.lines.into_iter().map(TerminalLine::Output));
        });

        match output.action {
            Some(TerminalAction::Open(app_id)) => runtime.open_app(app_id),
            Some(TerminalAction::Reveal) => runtime.dispatch_action(DesktopAction::RevealHidden),
            Some(TerminalAction::Clear) => transcript.set(Vec::new()),
            Some(TerminalAction::Exit) => {
                runtime.dispatch_action(DesktopAction::CloseWindow { window_id })
            }
            None => {}
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let recalled = match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                submit();
                return;
            }
            "ArrowUp" => history.try_update_value(|h| h.previous().map(str::to_string)),
            "ArrowDown" => history.try_update_value(|h| h.next().map(str::to_string)),
            _ => return,
        };
        ev.prevent_default();
        if let Some(command) = recalled.flatten() {
            input.set(command);
        }
    };

    view! {
        <div class="app app-terminal">
            <div class="terminal-transcript" role="log" aria-live="polite">
                {move || {
                    transcript
                        .get()
                        .into_iter()
                        .map(|line| match line {
                            TerminalLine::Prompt(text) => {
                                view! { <p class="terminal-line prompt">"guest@portfolio:~$ " {text}</p> }
                            }
                            TerminalLine::Output(text) => {
                                view! { <p class="terminal-line">{text}</p> }
                            }
                        })
                        .collect_view()
                }}
            </div>
            <label class="terminal-prompt">
                <span aria-hidden="true">"guest@portfolio:~$"</span>
                <input
                    id=window_primary_input_dom_id(window_id)
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    aria-label="Terminal command"
                    prop:value=input
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_resolves_visible_apps_only() {
        let output = run_command("open   paint", false);
        assert_eq!(output.action, Some(TerminalAction::Open(AppId::Paint)));
        assert_eq!(output.lines, vec!["opening Paint...".to_string()]);

        let hidden = run_command("open secrets", false);
        assert_eq!(hidden.action, None);
        assert_eq!(hidden.lines, vec!["open: secrets: no such application".to_string()]);

        let revealed = run_command("open secrets", true);
        assert_eq!(revealed.action, Some(TerminalAction::Open(AppId::Secrets)));
    }

    #[test]
    fn reveal_fires_once() {
        assert_eq!(
            run_command("reveal", false).action,
            Some(TerminalAction::Reveal)
        );
        assert_eq!(run_command("reveal", true).action, None);
    }

    #[test]
    fn unknown_and_blank_commands() {
        assert_eq!(
            run_command("rm -rf /", false).lines,
            vec!["rm: command not found".to_string()]
        );
        assert_eq!(run_command("   ", false), CommandOutput::default());
        assert_eq!(
            run_command("open", false).lines,
            vec!["usage: open <app>".to_string()]
        );
    }

    #[test]
    fn ls_lists_desktop_apps_in_catalog_order() {
        let listed = run_command("ls", false).lines;
        assert_eq!(listed.first().map(String::as_str), Some("about"));
        assert!(!listed.iter().any(|name| name == "secrets"));
    }

    #[test]
    fn history_walks_back_and_forward() {
        let mut history = CommandHistory::default();
        for command in ["ls", "ls", "whoami", "  ", "open paint"] {
            history.push(command);
        }

        assert_eq!(history.previous(), Some("open paint"));
        assert_eq!(history.previous(), Some("whoami"));
        assert_eq!(history.previous(), Some("ls"));
        assert_eq!(history.previous(), Some("ls"));
        assert_eq!(history.next(), Some("whoami"));
        assert_eq!(history.next(), Some("open paint"));
        assert_eq!(history.next(), Some(""));
        assert_eq!(history.next(), None);
    }

    #[test]
    fn history_is_bounded() {
        let mut history = CommandHistory::default();
        for n in 0..(HISTORY_LIMIT + 10) {
            history.push(&format!("echo {n}"));
        }
        assert_eq!(history.entries.len(), HISTORY_LIMIT);
        assert_eq!(history.entries[0], "echo 10");
    }
}
