//! The built-in intent table.

use crate::intent::registry::Intent;

/// Build the default set of intents served by [`Chatbot::new`](crate::chat::Chatbot::new).
///
/// Order matters: the training corpus follows it, and ties between equally
/// similar patterns go to the intent listed first.
pub fn builtin_intents() -> Vec<Intent> {
    vec![
        Intent::new(
            "greeting",
            &[
                "hello",
                "hi",
                "hey",
                "greetings",
                "good morning",
                "good afternoon",
                "good evening",
                "what's up",
                "howdy",
            ],
            &[
                "Hello! How can I help you today?",
                "Hi there! What can I do for you?",
                "Greetings! How may I assist you?",
                "Hey! What brings you here today?",
            ],
        ),
        Intent::new(
            "goodbye",
            &[
                "bye",
                "goodbye",
                "see you",
                "farewell",
                "take care",
                "catch you later",
                "until next time",
                "have a good day",
            ],
            &[
                "Goodbye! Have a great day!",
                "See you later! Take care!",
                "Farewell! Come back soon!",
                "Bye! Hope to chat with you again!",
            ],
        ),
        Intent::new(
            "thanks",
            &[
                "thank you",
                "thanks",
                "appreciate it",
                "thank you very much",
                "thanks a lot",
                "many thanks",
                "thx",
            ],
            &[
                "You're welcome!",
                "Happy to help!",
                "My pleasure!",
                "Anytime! Glad I could assist!",
            ],
        ),
        Intent::new(
            "help",
            &[
                "help",
                "can you help me",
                "i need help",
                "assist me",
                "support",
                "what can you do",
                "how do you work",
            ],
            &[
                "I'm here to help! I can answer questions, have conversations, and assist you with various topics.",
                "I can help you with many things! Just ask me a question or tell me what you need.",
                "I'm a chatbot designed to assist you. Feel free to ask me anything!",
            ],
        ),
        Intent::new(
            "name",
            &[
                "what is your name",
                "who are you",
                "what should i call you",
                "what are you called",
                "your name",
            ],
            &[
                "I'm an NLP-powered chatbot! You can call me ChatBot.",
                "I'm ChatBot, your AI assistant with natural language processing capabilities.",
                "My name is ChatBot. I'm here to help you!",
            ],
        ),
        Intent::new(
            "howareyou",
            &[
                "how are you",
                "how are you doing",
                "how's it going",
                "how do you do",
                "what's up",
                "how are things",
            ],
            &[
                "I'm doing great, thank you for asking! How can I help you?",
                "I'm functioning perfectly! What can I do for you today?",
                "All systems operational! How may I assist you?",
            ],
        ),
        Intent::new(
            "weather",
            &[
                "weather",
                "what's the weather",
                "is it raining",
                "temperature",
                "forecast",
                "will it rain",
                "sunny",
            ],
            &[
                "I don't have real-time weather data, but I suggest checking a weather website or app for accurate information.",
                "For current weather conditions, I recommend checking your local weather service.",
                "I'm not connected to weather services, but you can easily find weather information online!",
            ],
        ),
        Intent::new(
            "joke",
            &[
                "tell me a joke",
                "joke",
                "make me laugh",
                "something funny",
                "humor",
                "funny",
            ],
            &[
                "Why don't scientists trust atoms? Because they make up everything!",
                "What do you call a bear with no teeth? A gummy bear!",
                "Why did the scarecrow win an award? He was outstanding in his field!",
                "What do you call fake spaghetti? An impasta!",
            ],
        ),
        Intent::new(
            "time",
            &[
                "what time is it",
                "current time",
                "time",
                "what's the time",
                "tell me the time",
            ],
            &[
                "I don't have access to real-time data, but you can check your device's clock!",
                "I can't tell time, but your device surely can!",
                "For the current time, please check your system clock.",
            ],
        ),
        Intent::new(
            "default",
            &[],
            &[
                "I'm not sure I understand. Could you rephrase that?",
                "Interesting! Can you tell me more?",
                "I'm still learning. Can you ask that in a different way?",
                "That's a good question! I'm working on understanding more queries like that.",
            ],
        ),
    ]
}
