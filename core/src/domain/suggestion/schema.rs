use serde_json::json;

/// JSON schema handed to the generative model as its structured-output
/// contract. The exact-5 cardinality is requested in the prompt and
/// enforced by validation after parsing, not by the schema.
pub fn suggestion_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "time": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "instructions": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "image_query": { "type": "string" }
                    },
                    "required": [
                        "title", "time", "ingredients", "instructions", "image_query"
                    ]
                }
            }
        },
        "required": ["recipes"]
    })
}
