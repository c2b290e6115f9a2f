//! The interactive console loop.
//!
//! Reads user lines from stdin, forwards them to the session controller, and
//! prints new transcript entries as rounds complete. Colon-prefixed commands
//! drive everything that is not a chat message.

use discai_core::{SessionController, Speaker};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Formats one transcript entry for the terminal.
pub fn format_entry(display_name: &str, text: &str) -> String {
    format!("{}: {}", display_name, text)
}

pub struct App {
    controller: SessionController,
    agent_a_name: String,
    agent_b_name: String,
    /// Number of transcript entries already printed.
    printed: usize,
}

impl App {
    pub fn new(
        controller: SessionController,
        agent_a_name: impl Into<String>,
        agent_b_name: impl Into<String>,
    ) -> Self {
        Self {
            controller,
            agent_a_name: agent_a_name.into(),
            agent_b_name: agent_b_name.into(),
            printed: 0,
        }
    }

    fn display_name(&self, speaker: Speaker) -> &str {
        match speaker {
            Speaker::User => "You",
            Speaker::AgentA => &self.agent_a_name,
            Speaker::AgentB => &self.agent_b_name,
        }
    }

    /// Formats every transcript entry that has not been printed yet.
    fn drain_new_entries(&mut self) -> Vec<String> {
        let entries = self.controller.transcript().entries();
        let lines: Vec<String> = entries[self.printed..]
            .iter()
            .map(|e| format_entry(self.display_name(e.speaker), &e.text))
            .collect();
        self.printed = entries.len();
        lines
    }

    fn print_new_entries(&mut self) {
        for line in self.drain_new_entries() {
            println!("{}", line);
        }
    }

    fn print_prompt(&self) {
        let hint = if self.controller.session().round == 1 {
            "enter your name"
        } else {
            "your response (:help for commands)"
        };
        print!("[round {}] {} > ", self.controller.session().round, hint);
        let _ = std::io::stdout().flush();
    }

    fn print_help(&self) {
        println!(":mute     toggle narration");
        println!(":record   start voice capture");
        println!(":stop     stop voice capture (captured text is sent on an empty line)");
        println!(":article  show the material disclosed so far");
        println!(":quit     leave the session");
    }

    fn print_disclosure(&self) {
        let snapshot = self.controller.disclosure();
        println!("# {}", snapshot.title);
        for block in &snapshot.description {
            println!("{}", block.content);
        }
        if !snapshot.code.is_empty() {
            println!("--- code ({}) ---", snapshot.language);
            println!("{}", snapshot.code);
        }
    }

    /// Runs the conversation until the user quits or stdin closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!(
            "Disc AI — discussing \"{}\" with {} and {}",
            self.controller.material().title,
            self.agent_a_name,
            self.agent_b_name
        );

        self.controller.start().await;
        self.print_new_entries();
        self.print_prompt();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim().to_string();
            match line.as_str() {
                ":quit" | ":q" => break,
                ":help" => self.print_help(),
                ":mute" => {
                    self.controller.toggle_mute();
                    let state = if self.controller.session().is_muted {
                        "muted"
                    } else {
                        "unmuted"
                    };
                    println!("narration {}", state);
                }
                ":record" => {
                    self.controller.start_recording().await;
                    if self.controller.is_recording() {
                        println!("recording... (:stop to finish)");
                    } else {
                        println!("could not start recording");
                    }
                }
                ":stop" => {
                    self.controller.stop_recording().await;
                    match self.controller.pending_input() {
                        Some(text) => println!("captured: {} (empty line sends it)", text),
                        None => println!("nothing captured"),
                    }
                }
                ":article" => self.print_disclosure(),
                "" => {
                    if let Some(text) = self.controller.take_pending_input() {
                        self.controller.submit(&text).await;
                        self.print_new_entries();
                    }
                }
                text => {
                    if !self.controller.can_submit() {
                        debug!("input ignored; submit gate closed");
                        println!("(please wait for the agents to finish)");
                    } else {
                        self.controller.submit(text).await;
                        self.print_new_entries();
                    }
                }
            }
            self.print_prompt();
        }

        println!();
        println!("session closed after {} rounds", self.controller.session().round);
        Ok(())
    }
}
