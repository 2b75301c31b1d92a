//! Terminal rendition of the love calculator form
//!
//! The prompts are blocking dialoguer calls, so each one runs on the
//! blocking pool while the controller's requests keep running on the
//! async runtime.

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::Spinner;
use crate::view::{Controller, UiText};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum InteractiveError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Prompt task failed: {0}")]
    Join(#[from] JoinError),
}

/// Interactive session driving a [`Controller`]
pub struct InteractiveApp {
    controller: Controller,
    show_progress: bool,
}

impl InteractiveApp {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run until the user declines another round
    pub async fn run(mut self) -> Result<(), InteractiveError> {
        let text = self.controller.text();
        println!("{}", ConsoleFormatter::banner(text));

        loop {
            while self.controller.state().key_needed {
                self.prompt_key(text).await?;
            }

            let name1 = ask_line(text.first_name).await?;
            let name2 = ask_line(text.second_name).await?;

            if !self.controller.submit_calculate(&name1, &name2) {
                self.show_error();
                continue;
            }

            self.wait(text.calculating).await;

            if self.show_error() {
                continue;
            }

            let state = self.controller.state();
            if let (Some(pair), Some(result)) = (&state.pair, &state.result) {
                println!("{}", ConsoleFormatter::format_result(pair, result, text));
            }

            if self.controller.state().can_request_story() && ask_confirm(text.story_button, false).await? {
                self.controller.submit_story();
                self.wait(text.writing_story).await;

                if !self.show_error()
                    && let Some(story) = &self.controller.state().story
                {
                    println!("{}", ConsoleFormatter::format_story(story, text));
                }
            }

            if !ask_confirm(text.again, true).await? {
                break;
            }
        }

        println!("{}", ConsoleFormatter::footer(text));
        info!("Interactive session finished");
        Ok(())
    }

    async fn prompt_key(&mut self, text: &'static UiText) -> Result<(), InteractiveError> {
        println!("\n{}", text.key_heading);
        println!("{}", text.key_intro);
        println!("{}\n", text.key_note);

        let prompt = text.key_prompt;
        let raw = tokio::task::spawn_blocking(move || {
            Password::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
        })
        .await??;

        self.controller.submit_key(&raw);
        self.show_error();
        Ok(())
    }

    async fn wait(&mut self, message: &str) {
        let spinner = if self.show_progress {
            Spinner::start(message)
        } else {
            Spinner::hidden()
        };
        self.controller.settle().await;
        spinner.finish();
    }

    /// Print and clear the error banner. Returns whether there was one.
    fn show_error(&mut self) -> bool {
        match self.controller.take_error() {
            Some(message) => {
                debug!("Showing error banner: {}", message);
                eprintln!("{}", ConsoleFormatter::format_error(&message));
                true
            }
            None => false,
        }
    }
}

async fn ask_line(prompt: &'static str) -> Result<String, InteractiveError> {
    let line = tokio::task::spawn_blocking(move || {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    })
    .await??;
    Ok(line)
}

async fn ask_confirm(prompt: &'static str, default: bool) -> Result<bool, InteractiveError> {
    let answer = tokio::task::spawn_blocking(move || {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()
    })
    .await??;
    Ok(answer)
}
