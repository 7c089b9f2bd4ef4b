//! Canned response templates, one per risk tier. Static content selection:
//! nothing influences the choice beyond the tier and, for the moderate tier,
//! whether the message carries calming-topic vocabulary.

use super::classifier::{mentions_calming_topic, RiskTier};

pub const DISCLAIMER: &str = "This is an automated assistant providing educational information only. Not a substitute for professional medical advice.";

/// Pick the template for a tier. The message itself is only consulted for
/// the moderate tier's breathing/grounding variant.
pub fn respond_for(tier: RiskTier, message: &str) -> &'static str {
    match tier {
        RiskTier::Crisis => CRISIS_RESPONSE,
        RiskTier::HighRisk => HIGH_RISK_RESPONSE,
        RiskTier::Moderate if mentions_calming_topic(message) => GROUNDING_RESPONSE,
        RiskTier::Moderate => MODERATE_RESPONSE,
        RiskTier::Low => LOW_RESPONSE,
    }
}

const CRISIS_RESPONSE: &str = "**I'm very concerned about what you've shared. Your safety is the top priority right now.**

**PLEASE GET HELP IMMEDIATELY:**

- **Call or text 988** - Suicide & Crisis Lifeline (24/7)
- **Text HELLO to 741741** - Crisis Text Line
- **Call 911** or go to nearest emergency room
- **National Suicide Prevention Lifeline: 1-800-273-8255**

**You are not alone.** Crisis counselors are available right now to help you. They understand what you're going through and want to support you.

If you're in immediate danger, please call 911 or have someone take you to an emergency room.

These feelings are temporary, even though they don't feel that way right now. Please reach out for help - you deserve support and there is hope.";

const HIGH_RISK_RESPONSE: &str = "I can hear that you're going through an incredibly difficult time. What you're feeling is real and valid.

**You don't have to face this alone.** Here are some resources that can provide support:

- **988 Suicide & Crisis Lifeline** - Call or text 988 (24/7)
- **Crisis Text Line** - Text HELLO to 741741
- **SAMHSA National Helpline** - 1-800-662-4357 (24/7, free, confidential)

**Right now, you could:**
1. Reach out to someone you trust
2. Use the 5-4-3-2-1 grounding technique
3. Take slow, deep breaths
4. Go to a safe, comfortable place

What you're experiencing is temporary, even though it might not feel that way. Many people have felt this way and found relief. Professional help can make a real difference.

Is there something specific that's causing you pain right now? Sometimes talking about it can help.";

const GROUNDING_RESPONSE: &str = "I understand you're feeling anxious or overwhelmed. These feelings are uncomfortable, but they will pass.

**Here are some techniques that can help right now:**

1. **4-7-8 Breathing**: Breathe in for 4, hold for 7, out for 8. Repeat 4 times.
2. **5-4-3-2-1 Grounding**: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.
3. **Body Scan**: Notice tension in your body and consciously release it.

**Remember:**
- Anxiety is uncomfortable but not dangerous
- This feeling will pass
- You've gotten through this before
- You're safe right now in this moment

If anxiety is interfering with your daily life, consider taking the GAD-7 assessment, and talk to a healthcare provider.

What triggered these feelings? Sometimes identifying the cause can help us address it.";

const MODERATE_RESPONSE: &str = "Thank you for sharing that with me. It takes courage to reach out when you're struggling.

**Here are some ways I can help:**

- **Take a self-assessment** - PHQ-9 for depression, GAD-7 for anxiety
- **Try coping techniques** - Breathing exercises, grounding techniques
- **Find crisis resources** - Hotlines available 24/7 if you need them

**Remember:** This platform provides education and tools, but it's not a substitute for professional care. If symptoms persist or worsen, please consider reaching out to a mental health professional.

What specific area would you like help with? I can guide you to relevant resources.";

const LOW_RESPONSE: &str = "Hello! I'm here to help you navigate mental health resources and support.

**I can help you with:**

- Finding validated self-assessment tools
- Learning coping strategies and relaxation exercises
- Finding crisis resources if needed

**Important to know:**
- I'm an automated assistant, not a therapist or medical professional
- This platform is for education and support, not diagnosis or treatment
- If you're in crisis, please call 988 or your local emergency number

What would you like help with today? You can ask me about specific mental health topics, request assessment tools, or learn about coping strategies.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crisis_response_includes_lifeline_number() {
        assert!(respond_for(RiskTier::Crisis, "").contains("988"));
    }

    #[test]
    fn high_risk_response_includes_hotlines() {
        let response = respond_for(RiskTier::HighRisk, "");
        assert!(response.contains("988"));
        assert!(response.contains("741741"));
    }

    #[test]
    fn moderate_response_specializes_for_calming_vocabulary() {
        let grounding = respond_for(RiskTier::Moderate, "I had a panic attack on the train");
        assert!(grounding.contains("4-7-8 Breathing"));

        let general = respond_for(RiskTier::Moderate, "I'm scared about my exam");
        assert!(!general.contains("4-7-8 Breathing"));
        assert!(general.contains("Breathing exercises"));
    }

    #[test]
    fn low_response_lists_capabilities() {
        assert!(respond_for(RiskTier::Low, "hi").contains("self-assessment"));
    }
}
