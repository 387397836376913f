// Persona generation: prompt constants and the prompt builder.
// The completion call itself goes through llm_client.

pub mod builder;
pub mod prompts;
