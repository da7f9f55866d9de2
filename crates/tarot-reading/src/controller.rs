//! The reading controller: greets the user, runs readings, says goodbye.
//!
//! Every step blocks on the console. "Shuffle more?" and "another reading?"
//! are plain loops that exit when the user answers "no".

use std::thread;

use crate::config::ReadingConfig;
use crate::console::{Console, Tone};
use crate::error::{ReadingError, ReadingResult};
use crate::menu::{choose, confirm};
use crate::narration;
use crate::session::Session;

/// Drives a [`Session`] through a [`Console`].
pub struct Controller<C> {
    session: Session,
    console: C,
    config: ReadingConfig,
}

impl<C: Console> Controller<C> {
    /// Create a controller for a session.
    pub fn new(session: Session, console: C, config: ReadingConfig) -> Self {
        Self {
            session,
            console,
            config,
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Take the session and console back.
    pub fn into_parts(self) -> (Session, C) {
        (self.session, self.console)
    }

    /// Run a whole visit: intro, one or more readings, outro.
    pub fn run(&mut self) -> ReadingResult<()> {
        self.intro()?;
        loop {
            self.reading()?;
            self.dialogue("That concludes this reading. Would you like to do another one?")?;
            if !confirm(&mut self.console)? {
                self.dialogue("I hope this was insightful.")?;
                break;
            }
        }
        self.outro()
    }

    /// Greet the user and learn their name.
    pub fn intro(&mut self) -> ReadingResult<()> {
        self.title("Tarot")?;
        self.dialogue("Hello and welcome to my tarot reading table.")?;
        let greeting = format!(
            "My name is {}. I've been expecting you, it's very nice to finally meet you...",
            self.config.reader_name
        );
        self.dialogue(&greeting)?;
        self.dialogue("While I may be psychic, I'm not a mind reader. What should I call you?")?;

        self.console.say(Tone::Plain, "Type your response:")?;
        self.console.blank()?;
        let raw = self.console.read_line()?;
        let name = self.session.set_username(&raw).to_string();
        self.pause(1)?;

        self.dialogue(&format!("Welcome {name}. How are you?"))?;
        self.wait_for_enter("Type your response:")?;
        self.console.blank()?;
        self.dialogue("Ah! Don't worry, it shouldn't affect the reading.")?;
        self.pause(1)?;

        self.dialogue("Are you ready to begin?")?;
        self.wait_for_enter("Press enter when you're ready to continue")?;
        Ok(())
    }

    /// One full reading from a fresh deck.
    pub fn reading(&mut self) -> ReadingResult<()> {
        self.session.reset();

        self.dialogue("I can do a few different types of readings.")?;
        self.dialogue("Which would you like?")?;
        let options = self.session.spread_options();
        let label = choose(&mut self.console, &options)?.to_string();
        let spread = self.session.select_spread(&label)?;
        let title = spread.title().to_string();
        let total = spread.required_count();

        self.dialogue("Thank you, give me a moment to shuffle the cards.")?;
        self.dialogue("Take this moment to focus on the situation in question.")?;
        self.pause(3)?;
        self.session.shuffle();

        loop {
            self.dialogue("Would you like me to mix these up more?")?;
            if confirm(&mut self.console)? {
                self.session.shuffle();
                self.pause(1)?;
            } else {
                self.dialogue("These seem pretty well mixed.")?;
                break;
            }
        }

        self.subtitle(&title)?;

        for i in 0..total {
            self.wait_for_enter(&narration::draw_prompt(i, total))?;
            let index = self.session.draw_next()?;
            self.report(index)?;
            self.dialogue(
                "Please take a moment to think about what this means for the situation you had in mind.",
            )?;
        }

        self.session.complete_reading()?;
        Ok(())
    }

    /// Say goodbye.
    pub fn outro(&mut self) -> ReadingResult<()> {
        let farewell = format!(
            "Thank you for visiting me, and remember, {}: my terminal is always open.",
            self.session.username()
        );
        self.dialogue(&farewell)?;
        self.dialogue("Come back anytime.")?;
        self.subtitle("Goodbye")
    }

    /// Describe the card just placed at `index`.
    fn report(&mut self, index: usize) -> ReadingResult<()> {
        let spread = self
            .session
            .active_spread()
            .ok_or(ReadingError::NoActiveSpread)?;
        let card = &spread.cards()[index];
        let label = spread.position_label(index).unwrap_or_default();
        let width = self.config.line_width;

        let lines = [
            (Tone::Detail, narration::position_line(index, label)),
            (Tone::Highlight, narration::drawn_line(card)),
            (Tone::Detail, narration::meaning_line(card)),
        ];
        for (tone, text) in lines {
            self.console
                .say(tone, &narration::center(&text, width, ' '))?;
            self.console.blank()?;
        }
        Ok(())
    }

    fn dialogue(&mut self, text: &str) -> ReadingResult<()> {
        self.console.say(Tone::Dialogue, text)?;
        self.console.blank()
    }

    fn title(&mut self, text: &str) -> ReadingResult<()> {
        self.console.blank()?;
        for line in narration::banner(text, self.config.line_width) {
            self.console.say(Tone::Banner, &line)?;
        }
        self.console.blank()
    }

    fn subtitle(&mut self, text: &str) -> ReadingResult<()> {
        self.console.blank()?;
        let line = narration::subtitle(text, self.config.line_width);
        self.console.say(Tone::Banner, &line)?;
        self.console.blank()
    }

    fn wait_for_enter(&mut self, prompt: &str) -> ReadingResult<String> {
        self.console.say(Tone::Plain, prompt)?;
        self.console.blank()?;
        self.console.read_line()
    }

    fn pause(&mut self, units: u32) -> ReadingResult<()> {
        if !self.config.pace.is_zero() {
            thread::sleep(self.config.pace * units);
        }
        self.console.blank()
    }
}
