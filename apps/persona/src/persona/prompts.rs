// All LLM prompt constants for persona generation.

/// System instruction framing the assistant's role.
pub const PERSONA_SYSTEM: &str = "You are an expert in behavioral profiling and UX personas.";

/// Persona prompt template. Replace `{post_block}` and `{comment_block}` before sending.
pub const PERSONA_PROMPT_TEMPLATE: &str = r#"
You are an AI assistant that generates high-quality UX-style user personas based on Reddit data. Use the following format:

────────────────────────────────────────────
👤 NAME: (Name or Unknown)
🎂 AGE: (Estimate if possible)
💼 OCCUPATION:
📍 LOCATION:
📶 STATUS: (Single, Married, etc.)
🧠 ARCHETYPE: (e.g., The Explorer, The Creator)
🌟 TIER: (Early Adopter, Lurker, etc.)

────────────────────────────────────────────
🎯 TRAITS
• Practical / Adaptable / Curious / Tech-savvy etc.

────────────────────────────────────────────
💬 BEHAVIOUR & HABITS
• Bullet point habits from Reddit activity

────────────────────────────────────────────
😤 FRUSTRATIONS
• Bullet point complaints or difficulties mentioned

────────────────────────────────────────────
🎯 GOALS & NEEDS
• Bullet point goals and desires inferred from posts

────────────────────────────────────────────
🔥 MOTIVATIONS
Rate with bars:
- Convenience: ██████████
- Wellness:    ████████
- Speed:       ███████
- Preferences: ██████
- Comfort:     ████████
- Dietary:     ██████

────────────────────────────────────────────
🧠 PERSONALITY
• Introvert – Extrovert
• Intuition – Sensing
• Feeling – Thinking
• Judging – Perceiving

────────────────────────────────────────────
🧾 CITATIONS
Use bullet points with quotes and Reddit links to support each insight.

POSTS:
{post_block}

COMMENTS:
{comment_block}
"#;
