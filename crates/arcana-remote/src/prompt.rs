//! Prompt construction for remote readings.
//!
//! The user prompt lists the question, topic, spread and cards, then asks
//! for a fixed set of sections. Four of those sections are tailored to the
//! question's intent through an [`AnalysisFramework`].

use arcana_core::{Intent, Pick, TopicCategory};

/// Persona and ground rules sent as the system message.
pub const SYSTEM_PROMPT: &str = "You are a senior tarot reader with twenty years of experience. \
Your core tasks:

1. Answer the question directly. Do not evade; give a clear answer or direction.
2. Give probability estimates. For predictive questions, state a likelihood as a percentage.
3. Stay specific. Every point must relate directly to the querent's actual question.
4. Give concrete advice. Offer actionable, practical steps.
5. Stay professional. Use tarot terminology, but explain it in plain language.

The querent came for clear guidance, not a generic reading. Answer their specific question.";

/// Intent-specific instructions for the analysis sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisFramework {
    /// What the in-depth analysis covers.
    pub depth_analysis: &'static str,
    /// How to read the individual cards.
    pub card_analysis: &'static str,
    /// Which key information to extract.
    pub key_info: &'static str,
    /// What the action advice covers.
    pub action_advice: &'static str,
    /// What the timeline predicts.
    pub timeline: &'static str,
    /// What to warn about.
    pub warnings: &'static str,
}

impl AnalysisFramework {
    /// The framework for an intent.
    pub fn for_intent(intent: Intent) -> Self {
        match intent {
            Intent::YesNo => Self {
                depth_analysis: "Analyse the core tension of the question, how the cards point to yes or no, and the key factors behind that judgement.",
                card_analysis: "Explain how each card supports or opposes a yes, and state a clear leaning.",
                key_info: "Extract the strongest yes/no signal and assess how well the evidence supports it.",
                action_advice: "Based on the answer, give a concrete strategy and plan of action.",
                timeline: "Predict within what time frame the answer will be confirmed.",
                warnings: "Point out factors that could affect the accuracy of the judgement and variables to watch.",
            },
            Intent::Choice => Self {
                depth_analysis: "Analyse the strengths and weaknesses of each option, how the cards point to the best choice, and the likely results of choosing it.",
                card_analysis: "Read the energy each card gives its option and compare how strongly the cards support each one.",
                key_info: "Extract the deciding factors and which option best fits the cards' guidance.",
                action_advice: "For the best choice, give concrete steps and points of attention.",
                timeline: "Predict how things develop at each stage after the choice.",
                warnings: "Point out the risks and challenges each option may bring.",
            },
            Intent::Trend => Self {
                depth_analysis: "Analyse how the situation is developing and how the cards reveal its future direction and changes.",
                card_analysis: "Read each card as a different period of the trend and identify the key turning points.",
                key_info: "Extract the key turning points and important moments in the trend.",
                action_advice: "Based on the trend, advise whether to go with it or adjust against it, concretely.",
                timeline: "Predict the short-, mid- and long-term development in detail, with time markers.",
                warnings: "Point out the key factors and risks that could change the trend.",
            },
            Intent::Prediction => Self {
                depth_analysis: "Analyse what may happen and how the cards reveal the possibilities.",
                card_analysis: "Read each card as information about a different period and assess the spread of probabilities.",
                key_info: "Extract the most likely outcome with a probability estimate (for example 70%).",
                action_advice: "Based on the prediction, give concrete ways to prepare and respond.",
                timeline: "Predict possible events and developments for each period in detail.",
                warnings: "Point out the variables and uncertainty that could affect the prediction.",
            },
            Intent::Advice => Self {
                depth_analysis: "Analyse the core problem of the current situation and how the cards point to the best way forward.",
                card_analysis: "Read the angle of advice each card offers and rank the advice by priority.",
                key_info: "Extract the most important guidance and assess its feasibility and effect.",
                action_advice: "Following the cards, give concrete steps and an implementation plan.",
                timeline: "Predict when acting on the advice will show results.",
                warnings: "Point out the difficulties and pitfalls of carrying out the advice.",
            },
            Intent::Reason => Self {
                depth_analysis: "Analyse the root cause of the problem and how the cards reveal the deeper chain of cause and effect.",
                card_analysis: "Read each card as a different layer of cause and weigh how much each matters.",
                key_info: "Extract the central root cause and how the causes relate to each other.",
                action_advice: "Based on the causes, give targeted solutions and preventive measures.",
                timeline: "Predict the time and steps needed to address the root cause.",
                warnings: "Point out hidden causes that may be overlooked and potential risks.",
            },
            Intent::Time => Self {
                depth_analysis: "Analyse the key timing information and how the cards reveal the best moment.",
                card_analysis: "Read each card as the energy of a different period and assess how much timing matters.",
                key_info: "Extract the most important moments and how urgent the timing is.",
                action_advice: "Based on the timing, give concrete advice on when to act and how to schedule it.",
                timeline: "Predict the possible developments and key moments for each period in detail.",
                warnings: "Point out factors that could throw off the timing and the risks of acting too early or late.",
            },
            Intent::Comparison => Self {
                depth_analysis: "Analyse the characteristics of what is being compared and how the cards reveal the strengths and weaknesses of each.",
                card_analysis: "Read each card as a different dimension of the comparison and state the result.",
                key_info: "Extract the most important factors of the comparison and which option has the advantage.",
                action_advice: "Based on the comparison, recommend a choice and next steps.",
                timeline: "Predict how each choice would develop over time.",
                warnings: "Point out factors the comparison might miss and potential problems.",
            },
            Intent::General => Self {
                depth_analysis: "Analyse every aspect of the question and how the cards reveal the connections between them.",
                card_analysis: "Read each card as a different layer of the situation and assess the overall balance.",
                key_info: "Extract the central message and how the different elements fit together.",
                action_advice: "Based on the whole reading, give a complete solution and a long-term plan.",
                timeline: "Predict the stages and key milestones of the overall development.",
                warnings: "Point out the key factors and systemic risks that could affect the whole.",
            },
        }
    }
}

/// Everything the prompt needs to know about a reading.
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    /// The question as asked.
    pub question: &'a str,
    /// Its intent.
    pub intent: Intent,
    /// Its topic.
    pub category: TopicCategory,
    /// Cards in spread order.
    pub picks: &'a [Pick],
}

/// Build the user prompt.
pub fn build_prompt(request: &PromptRequest<'_>) -> String {
    let question = request.question.trim();
    let framework = AnalysisFramework::for_intent(request.intent);

    let mut prompt = format!(
        "Please give a professional, in-depth and highly specific analysis of the following tarot reading.\n\n\
         Reading details:\n\
         - Question: \"{question}\"\n\
         - Topic: {}\n\
         - Question type: {} ({})\n\
         - Spread: {}\n\
         - Cards drawn: {}\n\n\
         Cards:\n",
        request.category,
        request.intent,
        request.intent.hint(),
        request.intent.spread_name(),
        request.picks.len(),
    );
    for (i, pick) in request.picks.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {} - {} ({})\n",
            i + 1,
            pick.position,
            pick.card.name,
            pick.orientation
        ));
    }

    prompt.push_str(&format!(
        "\nStructure your analysis strictly as follows:\n\n\
         ## Direct answer\n\
         First, answer the core question \"{question}\" directly from the cards, with a clear answer or direction.\n\n\
         ## In-depth analysis\n{}\n\n\
         ## Card-by-card reading\n{}\n\n\
         ## Key information\n{}\n\n\
         ## Concrete advice\n{}\n\n\
         ## Timeline\n{}\n\n\
         ## Warnings\n{}\n\n\
         Requirements:\n\
         - Answer the question directly; do not evade it.\n\
         - Relate every point to \"{question}\".\n\
         - For predictive questions, give a likelihood as a percentage.\n\
         - Keep advice concrete and actionable.\n\
         - Use tarot terminology but explain it plainly.\n\
         - Aim for 600 to 900 words.\n\n\
         Begin your reading:",
        framework.depth_analysis,
        framework.card_analysis,
        framework.key_info,
        framework.action_advice,
        framework.timeline,
        framework.warnings,
    ));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::deck;
    use arcana_core::{Orientation, Position};

    fn picks() -> Vec<Pick> {
        vec![
            Pick {
                card: deck::find("The Lovers").unwrap(),
                position: Position::OptionA,
                orientation: Orientation::Upright,
            },
            Pick {
                card: deck::find("Eight of Cups").unwrap(),
                position: Position::OptionB,
                orientation: Orientation::Reversed,
            },
        ]
    }

    #[test]
    fn prompt_lists_question_and_cards() {
        let picks = picks();
        let prompt = build_prompt(&PromptRequest {
            question: "  Should I move or stay?  ",
            intent: Intent::Choice,
            category: TopicCategory::Travel,
            picks: &picks,
        });
        assert!(prompt.contains("- Question: \"Should I move or stay?\""));
        assert!(prompt.contains("- Topic: Travel"));
        assert!(prompt.contains("- Spread: Choice Comparison"));
        assert!(prompt.contains("- Cards drawn: 2"));
        assert!(prompt.contains("1. option A - The Lovers (upright)"));
        assert!(prompt.contains("2. option B - Eight of Cups (reversed)"));
        assert!(prompt.contains(AnalysisFramework::for_intent(Intent::Choice).key_info));
        assert!(prompt.ends_with("Begin your reading:"));
    }

    #[test]
    fn frameworks_differ_by_intent() {
        let trend = AnalysisFramework::for_intent(Intent::Trend);
        let yes_no = AnalysisFramework::for_intent(Intent::YesNo);
        assert_ne!(trend, yes_no);
        for intent in Intent::all() {
            let f = AnalysisFramework::for_intent(*intent);
            assert!(!f.depth_analysis.is_empty() && !f.warnings.is_empty());
        }
    }
}
