//! FAQ assistant
//!
//! Static FAQ entries plus the keyword-matched responder behind the chat
//! overlay. The "bot" is a lookup table; the typing delay lives in the app's
//! pending-action queue.

/// A canned question/answer pair shown in the chat overlay
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 8] = [
    Faq {
        question: "What do the colors mean?",
        answer: "Green = BUY signal, Red = SELL signal, Yellow = HOLD signal. The confidence percentage shows how sure our AI is about the prediction.",
    },
    Faq {
        question: "How do I change language?",
        answer: "This build of TrendCast ships in English; language packs are on the roadmap.",
    },
    Faq {
        question: "How do I set an alert?",
        answer: "Go to any stock's detail page and press 'a'. You'll be notified when the stock hits your target conditions.",
    },
    Faq {
        question: "How accurate are the predictions?",
        answer: "Our AI accuracy varies by market conditions. Check the History section to see our track record for specific stocks and time periods.",
    },
    Faq {
        question: "Can I see past predictions?",
        answer: "Yes! Open the History view to see all past predictions and their outcomes.",
    },
    Faq {
        question: "How do daily vs hourly predictions work?",
        answer: "Daily predictions analyze long-term trends and market movements, while hourly predictions focus on short-term price fluctuations and quick trading opportunities.",
    },
    Faq {
        question: "What is confidence level?",
        answer: "Confidence level indicates how certain our AI model is about its prediction. Higher confidence (80%+) means stronger signals, while lower confidence suggests more uncertainty.",
    },
    Faq {
        question: "How do I switch between daily and hourly mode?",
        answer: "You can toggle between daily and hourly confidence modes in the stock list view with the Tab key.",
    },
];

/// Staggered greeting shown when the chat is first opened
pub const WELCOME_MESSAGES: [&str; 4] = [
    "👋 Welcome to TrendCast! I'm here to help you navigate the world of stock predictions.",
    "🎯 I can answer questions about our features, explain how predictions work, and guide you through the app.",
    "💡 Feel free to ask me anything about stock analysis, confidence levels, or how to use TrendCast effectively!",
    "🚀 Ready to make smarter investment decisions? Let's get started!",
];

/// Keyword-matched canned response for a free-form question
pub fn smart_response(question: &str) -> &'static str {
    let q = question.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| q.contains(n));

    if has(&["hello", "hi", "hey"]) {
        return "Hello! 👋 Welcome to TrendCast! I'm excited to help you with your stock analysis journey. What would you like to know?";
    }
    if has(&["confidence", "percentage"]) {
        return "Great question! 📊 Confidence levels show how certain our AI is about predictions. Green (80%+) = High confidence, Yellow (60-79%) = Medium confidence, Red (<60%) = Lower confidence. Higher confidence generally means more reliable signals!";
    }
    if has(&["daily", "hourly", "time"]) {
        return "📅 Daily predictions analyze long-term market trends and are great for swing trading or investment decisions. ⏰ Hourly predictions focus on short-term price movements, perfect for day trading. You can switch between them in the stock list view!";
    }
    if has(&["color", "green", "red", "signal"]) {
        return "🎨 Our color system is simple: 🟢 Green = BUY (upward trend expected), 🔴 Red = SELL (downward trend expected), 🟡 Yellow = HOLD (sideways movement expected). Each comes with a confidence percentage!";
    }
    if has(&["accurate", "reliable", "trust"]) {
        return "📈 Our AI accuracy varies by market conditions, typically ranging from 65-85%. Check the History section to see our track record for specific stocks. Remember, no prediction is 100% guaranteed - always do your own research!";
    }
    if has(&["alert", "notification"]) {
        return "🔔 Setting alerts is easy! Go to any stock's detail page and press 'a'. You can pick the horizon and a confidence threshold. We'll notify you when conditions are met!";
    }
    if has(&["language", "translate"]) {
        return "🌐 This build of TrendCast is English-only; localized string tables are planned but not wired up yet.";
    }
    if has(&["how to use", "getting started", "tutorial"]) {
        return "🚀 Getting started is simple! 1️⃣ Select your country/market 2️⃣ Browse stocks and their predictions 3️⃣ Open any stock for detailed analysis 4️⃣ Set alerts for stocks you're watching 5️⃣ Check History to track our prediction accuracy!";
    }
    if has(&["thank", "thanks"]) {
        return "You're very welcome! 😊 I'm always here to help. Feel free to ask more questions anytime - I love helping users succeed with TrendCast!";
    }
    "🤔 That's an interesting question! While I might not have a specific answer for that, I can help with stock predictions, confidence levels, app features, and general guidance. Try asking about colors, confidence, daily vs hourly modes, or how to use TrendCast features!"
}
