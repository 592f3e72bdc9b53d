use serde_json::{Map, Value};

use crate::{Error, Result};

/// Symptom kinds a signature may be built from.
pub const SYMPTOM_TYPES: &[&str] = &[
    "output",
    "stackFrame",
    "stackSize",
    "crashAddress",
    "instruction",
    "testcase",
    "stackFrames",
];

/// Check that `raw` is a well-formed signature: a JSON object whose
/// `symptoms` array holds only known symptom kinds with their mandatory
/// fields. Nothing is matched against crashes here.
pub fn validate_signature(raw: &str) -> Result<()> {
    let value: Value = serde_json::from_str(raw)?;

    let Some(obj) = value.as_object() else {
        return Err(invalid("Signature must be a JSON object"));
    };

    let Some(symptoms) = obj.get("symptoms") else {
        return Err(invalid("Missing mandatory field 'symptoms' in signature"));
    };

    let Some(symptoms) = symptoms.as_array() else {
        return Err(invalid("Field 'symptoms' must be an array"));
    };

    if symptoms.is_empty() {
        return Err(invalid("Signature must contain at least one symptom"));
    }

    for symptom in symptoms {
        let Some(symptom) = symptom.as_object() else {
            return Err(invalid("Symptom must be a JSON object"));
        };
        validate_symptom(symptom)?;
    }

    Ok(())
}

fn validate_symptom(obj: &Map<String, Value>) -> Result<()> {
    let Some(stype) = obj.get("type") else {
        return Err(invalid("Missing symptom type in object"));
    };
    let stype = stype.as_str().unwrap_or_default();

    match stype {
        "output" => {
            require_string_or_object(obj, "value")?;
            if let Some(src) = obj.get("src") {
                let src = src.as_str().map(str::to_lowercase).unwrap_or_default();
                if src != "stderr" && src != "stdout" {
                    return Err(invalid(format!("Invalid source specified: {}", src)));
                }
            }
        }
        "testcase" => require_string_or_object(obj, "value")?,
        "stackFrame" => require_number_or_string(obj, "functionName")?,
        "stackSize" => require_number_or_string(obj, "size")?,
        "crashAddress" => require_number_or_string(obj, "address")?,
        "instruction" => {
            let has_registers = obj.get("registerNames").is_some_and(Value::is_array);
            let has_name = obj.get("instructionName").is_some();
            if !has_registers && !has_name {
                return Err(invalid("Must provide at least instruction name or register names"));
            }
        }
        "stackFrames" => {
            if !obj.get("functionNames").is_some_and(Value::is_array) {
                return Err(missing("functionNames"));
            }
        }
        other => return Err(invalid(format!("Unknown symptom type: {}", other))),
    }

    Ok(())
}

fn require_string_or_object(obj: &Map<String, Value>, key: &str) -> Result<()> {
    match obj.get(key) {
        Some(Value::String(_)) | Some(Value::Object(_)) => Ok(()),
        _ => Err(missing(key)),
    }
}

fn require_number_or_string(obj: &Map<String, Value>, key: &str) -> Result<()> {
    match obj.get(key) {
        Some(Value::String(_)) | Some(Value::Number(_)) => Ok(()),
        _ => Err(missing(key)),
    }
}

fn missing(key: &str) -> Error {
    invalid(format!("Missing mandatory field '{}' in symptom", key))
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidSignature(msg.into())
}
