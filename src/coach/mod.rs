//! Green Coach advisory services
//!
//! Every touchpoint takes structured context and answers with a
//! [`TextStream`]. A [`TextBackend`] can be plugged in to generate the text;
//! without one the coach answers from canned templates. Backend failures are
//! never surfaced: each operation substitutes its own fixed apology.

pub mod stream;
pub mod summary;

pub use stream::TextStream;
pub use summary::summarize_activities;

use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::badges::Badge;
use crate::model::{Activity, ChatMessage, ChatRole};
use crate::trip::{TripOption, TripPlan};
use crate::weather::{Delayed, WeatherReading};

/// Range of the simulated response latency (ms)
pub const MOCK_LATENCY_MS: RangeInclusive<u64> = 300..=1200;

pub const GREETING: &str = "Hi! I am your Green Coach. I can give you personalized advice based on your logged activities. Ask me anything, or get a proactive tip!";

const UNAVAILABLE_REPLY: &str =
    "I'm sorry, but I'm currently unavailable. Please try again later.";
const CHAT_APOLOGY: &str = "I apologize, but I encountered an error. Please try again.";
const CANNED_TIP: &str = "Here's a tip: Consider using public transportation or cycling for short trips to reduce your carbon footprint.";
const TIP_APOLOGY: &str =
    "Consider small changes in your daily routine to reduce your environmental impact.";
const WEATHER_APOLOGY: &str =
    "I'm sorry, I'm having trouble generating a weather tip. Please try again later.";
const TRIP_APOLOGY: &str =
    "I'm sorry, I'm having trouble generating a suggestion. Please try again later.";

/// Failure of a text-generation backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("text backend unavailable: {0}")]
    Unavailable(String),
    #[error("text backend returned an empty response")]
    Empty,
}

/// A substitutable text generator (e.g. a hosted language model)
pub trait TextBackend {
    /// Produce a reply to `prompt`, given the prior conversation
    fn generate(&mut self, history: &[ChatMessage], prompt: &str) -> Result<String, AdvisorError>;
}

/// User context handed to the coach
#[derive(Debug, Clone, Copy)]
pub struct CoachContext<'a> {
    pub activities: &'a [Activity],
    pub unlocked_badges: &'a [&'static Badge],
    pub daily_goal: f64,
    pub today: NaiveDate,
}

impl CoachContext<'_> {
    pub fn summary(&self) -> String {
        summarize_activities(
            self.activities,
            self.unlocked_badges,
            self.daily_goal,
            self.today,
        )
    }
}

/// The Green Coach
pub struct Coach {
    backend: Option<Box<dyn TextBackend>>,
}

impl Default for Coach {
    fn default() -> Self {
        Self::canned()
    }
}

impl std::fmt::Debug for Coach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coach")
            .field("backend", &self.backend.is_some())
            .finish()
    }
}

impl Coach {
    /// Coach answering from templates only
    pub fn canned() -> Self {
        log::warn!("No text backend configured. Using canned coach responses.");
        Self { backend: None }
    }

    pub fn with_backend(backend: Box<dyn TextBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Open a chat primed with the user's context
    pub fn start_chat(&mut self, ctx: &CoachContext<'_>) -> ChatSession {
        let mut session = ChatSession {
            history: vec![
                ChatMessage::user(
                    "Hello! I'd like to track my carbon footprint and get eco-friendly advice.",
                ),
                ChatMessage::model(
                    "Hi! I'm your eco-coach, here to help you make sustainable choices. I'll provide personalized tips based on your activities and help you reach your carbon reduction goals.",
                ),
            ],
            transcript: vec![ChatMessage::model(GREETING)],
            available: false,
        };

        let Some(backend) = self.backend.as_mut() else {
            return session;
        };
        let context = ctx.summary();
        match backend.generate(&session.history, &context) {
            Ok(reply) => {
                session.history.push(ChatMessage::user(context));
                session.history.push(ChatMessage::model(reply));
                session.available = true;
            }
            Err(e) => log::error!("Error creating chat session: {e}"),
        }
        session
    }

    /// Reply to a chat message. The user message and the full reply are
    /// recorded in the session transcript.
    pub fn reply(&mut self, session: &mut ChatSession, message: &str) -> TextStream {
        session.transcript.push(ChatMessage::user(message));

        let text = match (self.backend.as_mut(), session.available) {
            (Some(backend), true) => match backend.generate(&session.history, message) {
                Ok(reply) => {
                    session.history.push(ChatMessage::user(message));
                    session.history.push(ChatMessage::model(reply.clone()));
                    reply
                }
                Err(e) => {
                    log::error!("Error in chat response: {e}");
                    CHAT_APOLOGY.to_string()
                }
            },
            _ => UNAVAILABLE_REPLY.to_string(),
        };

        session.transcript.push(ChatMessage::model(text.clone()));
        TextStream::new(text)
    }

    /// One actionable tip based on the user's history
    pub fn proactive_tip<R: Rng + ?Sized>(
        &mut self,
        ctx: &CoachContext<'_>,
        rng: &mut R,
    ) -> Delayed<TextStream> {
        delayed(self.tip_text(ctx), rng)
    }

    /// A tip suited to the current weather
    pub fn weather_insight<R: Rng + ?Sized>(
        &mut self,
        weather: &WeatherReading,
        rng: &mut R,
    ) -> Delayed<TextStream> {
        delayed(self.weather_text(weather), rng)
    }

    /// Compare the planned trip with the greenest alternative
    pub fn trip_suggestion<R: Rng + ?Sized>(
        &mut self,
        plan: &TripPlan,
        rng: &mut R,
    ) -> Delayed<TextStream> {
        delayed(self.trip_text(plan), rng)
    }

    fn tip_text(&mut self, ctx: &CoachContext<'_>) -> TextStream {
        let Some(backend) = self.backend.as_mut() else {
            return TextStream::new(CANNED_TIP);
        };
        let prompt = format!(
            "You are \"Green Coach,\" an AI assistant. Based on the following summary of a user's activity, provide ONE friendly, encouraging, and actionable tip to help them reduce their carbon footprint and meet their daily goal. The tip should be specific and directly related to the user's data. Be positive and concise.\n\nUSER ACTIVITY SUMMARY: {}\n\nYOUR TIP:",
            ctx.summary()
        );
        generate_or(&mut **backend, &prompt, TIP_APOLOGY, "tip")
    }

    fn weather_text(&mut self, weather: &WeatherReading) -> TextStream {
        let Some(backend) = self.backend.as_mut() else {
            return TextStream::new(format!(
                "With the weather being {} at {}°C, it's a great day to line-dry your clothes instead of using a dryer to save energy!",
                weather.condition, weather.temperature
            ));
        };
        let prompt = format!(
            "You are \"Green Coach,\" an AI assistant for the Enviro-Lytix app. Your goal is to provide a friendly, encouraging, and actionable tip to help users reduce their carbon footprint, based on the current weather. Be positive, concise, and practical.\n\nCURRENT WEATHER:\n- Condition: {}\n- Temperature: {}°C\n\nBased on this weather, provide ONE actionable tip. Keep the tip to one or two sentences.\n\nYOUR TIP:",
            weather.condition, weather.temperature
        );
        generate_or(&mut **backend, &prompt, WEATHER_APOLOGY, "weather insight")
    }

    fn trip_text(&mut self, plan: &TripPlan) -> TextStream {
        let planned = &plan.selected;
        let best = &plan.best;

        let Some(backend) = self.backend.as_mut() else {
            let text = if plan.is_best_choice() {
                format!(
                    "Great choice! For your {}km trip, the {} is the most eco-friendly option. Enjoy your low-impact journey!",
                    planned.distance, planned.mode
                )
            } else {
                format!(
                    "For your {}km trip, switching from a {} to a {} is a great choice! You could save around {:.1} kg of CO2e.",
                    planned.distance,
                    planned.mode,
                    best.mode,
                    planned.co2e - best.co2e
                )
            };
            return TextStream::new(text);
        };

        let prompt = trip_prompt(planned, best, &plan.options, plan.is_best_choice());
        generate_or(&mut **backend, &prompt, TRIP_APOLOGY, "trip suggestion")
    }
}

/// Chat state: the backend-facing history and the user-facing transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
    pub transcript: Vec<ChatMessage>,
    available: bool,
}

impl ChatSession {
    /// Whether replies come from a live backend
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn last_reply(&self) -> Option<&str> {
        self.transcript
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Model)
            .map(|m| m.text.as_str())
    }
}

/// Simulated latency for a mocked response
pub fn mock_latency<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.random_range(MOCK_LATENCY_MS))
}

/// Wrap a stream with a simulated latency
fn delayed<R: Rng + ?Sized>(stream: TextStream, rng: &mut R) -> Delayed<TextStream> {
    Delayed {
        value: stream,
        delay: mock_latency(rng),
    }
}

fn generate_or(
    backend: &mut dyn TextBackend,
    prompt: &str,
    apology: &str,
    what: &str,
) -> TextStream {
    match backend.generate(&[], prompt) {
        Ok(text) if !text.trim().is_empty() => TextStream::new(text),
        Ok(_) => {
            log::error!("Error generating {what}: {}", AdvisorError::Empty);
            TextStream::new(apology)
        }
        Err(e) => {
            log::error!("Error generating {what}: {e}");
            TextStream::new(apology)
        }
    }
}

fn trip_prompt(planned: &TripOption, best: &TripOption, all: &[TripOption], best_choice: bool) -> String {
    if best_choice {
        return format!(
            "You are \"Green Coach,\" an AI assistant for the Enviro-Lytix app. A user has planned a trip and has already selected the most eco-friendly option.\n\nUSER'S PLANNED TRIP & BEST OPTION:\n- Mode: {}\n- Distance: {} km\n- Estimated Emissions: {:.2} kg CO2e\n\nProvide a short, friendly, and encouraging message congratulating them on their sustainable choice.\n\nYOUR MESSAGE:",
            planned.mode, planned.distance, planned.co2e
        );
    }
    let options: Vec<String> = all
        .iter()
        .map(|o| format!("- {}: {:.2} kg CO2e", o.mode, o.co2e))
        .collect();
    format!(
        "You are \"Green Coach,\" an AI assistant for the Enviro-Lytix app. A user has planned a trip. Provide a friendly, encouraging, and actionable suggestion based on their plan and the best alternative.\n\nUSER'S PLANNED TRIP:\n- Mode: {}\n- Distance: {} km\n- Estimated Emissions: {:.2} kg CO2e\n\nBEST ALTERNATIVE:\n- Mode: {}\n- Estimated Emissions: {:.2} kg CO2e\n\nALL TRIP OPTIONS (for context):\n{}\n\nProvide ONE actionable suggestion in 1-2 sentences.\n\nYOUR SUGGESTION:",
        planned.mode,
        planned.distance,
        planned.co2e,
        best.mode,
        best.co2e,
        options.join("\n")
    )
}
