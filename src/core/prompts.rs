//! 提示词模板
//! Fixed personas and user-message builders for each endpoint.

use crate::proxy::mappers::openai::{ChatMessage, ContentPart};

pub const NOT_MAIZE_REFUSAL: &str =
    "This appears to not be a maize plant. Please upload an image of a maize plant for analysis.";

/// Conditions the image analysis is allowed to report.
pub const MAIZE_CONDITIONS: [&str; 7] = [
    "Fall armyworm",
    "Grasshopper damage",
    "Healthy maize plants",
    "Leaf beetle damage",
    "Leaf blight",
    "Leaf spot",
    "Streak virus",
];

const ANALYSIS_INSTRUCTION: &str =
    "Please analyze this maize plant and identify any issues from the specified classes.";

const CHATBOT_PERSONA: &str = "You are an agriculture expert chatbot that provides advice and information to maize farmers only. Don't respond to anything outside the context of maize farming.";

const OVERALL_PERSONA: &str = "You are an agriculture expert that provides overall recommendations for maize farmers based on weather data.";

fn maize_doctor_persona() -> String {
    let conditions = MAIZE_CONDITIONS
        .iter()
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "You are a helpful maize doctor that provides suggestions based on images of maize plants.\n\
         You should only detect and analyze maize plants and the following specific conditions:\n\
         {}\n\n\
         If the image is not of a maize plant, respond with: '{}'",
        conditions, NOT_MAIZE_REFUSAL
    )
}

pub fn maize_analysis_messages(image_data_url: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(maize_doctor_persona()),
        ChatMessage::user_parts(vec![
            ContentPart::text(ANALYSIS_INSTRUCTION),
            ContentPart::image_url(image_data_url),
        ]),
    ]
}

pub fn maize_chatbot_messages(query: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(CHATBOT_PERSONA), ChatMessage::user(query)]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub pressure: f64,
}

pub fn overall_recommendation_messages(reading: &WeatherReading) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(OVERALL_PERSONA),
        ChatMessage::user(format!(
            "The current weather conditions are: Temperature: {}°C, Humidity: {}%, Wind Speed: {} m/s, Pressure: {} hPa.",
            reading.temperature, reading.humidity, reading.windspeed, reading.pressure
        )),
    ]
}

/// A single weather measurement with its own insight endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherFactor {
    Temperature,
    Humidity,
    WindSpeed,
    Pressure,
}

impl WeatherFactor {
    /// Form field carrying the value
    pub fn field(&self) -> &'static str {
        match self {
            WeatherFactor::Temperature => "temperature",
            WeatherFactor::Humidity => "humidity",
            WeatherFactor::WindSpeed => "windspeed",
            WeatherFactor::Pressure => "pressure",
        }
    }

    fn persona(&self) -> &'static str {
        match self {
            WeatherFactor::Temperature => "You are an agriculture expert that explains how the current temperature affects maize crops and what farmers should do about it.",
            WeatherFactor::Humidity => "You are an agriculture expert that explains how the current humidity affects maize crops, including disease and pest risk, and what farmers should do about it.",
            WeatherFactor::WindSpeed => "You are an agriculture expert that explains how the current wind speed affects maize crops, including lodging and spraying conditions, and what farmers should do about it.",
            WeatherFactor::Pressure => "You are an agriculture expert that explains what the current atmospheric pressure suggests about upcoming weather for maize farmers and how they should prepare.",
        }
    }

    fn describe(&self, value: f64) -> String {
        match self {
            WeatherFactor::Temperature => format!("The current temperature is {}°C.", value),
            WeatherFactor::Humidity => format!("The current humidity is {}%.", value),
            WeatherFactor::WindSpeed => format!("The current wind speed is {} m/s.", value),
            WeatherFactor::Pressure => format!("The current atmospheric pressure is {} hPa.", value),
        }
    }

    pub fn messages(&self, value: f64) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.persona()),
            ChatMessage::user(self.describe(value)),
        ]
    }
}
