use crate::domain::errors::DinoError;
use crate::domain::models::{Diet, HumanForm, HumanRecord};

fn parse_measure(field: &str, raw: &str, required: bool) -> Result<f64, DinoError> {
    let raw = raw.trim();
    if raw.is_empty() {
        if required {
            return Err(DinoError::InvalidInput(format!("{} is required", field)));
        }
        return Ok(0.0);
    }
    let v: f64 = raw
        .parse()
        .map_err(|_| DinoError::InvalidInput(format!("{} must be a number, got {:?}", field, raw)))?;
    if !v.is_finite() || v < 0.0 {
        return Err(DinoError::InvalidInput(format!(
            "{} must be a non-negative number, got {:?}",
            field, raw
        )));
    }
    Ok(v)
}

/// Turns raw form values into a human record; height ends up in inches.
pub fn build_human(form: &HumanForm) -> Result<HumanRecord, DinoError> {
    let feet = parse_measure("feet", &form.feet, true)?;
    let inches = parse_measure("inches", &form.inches, false)?;
    let weight = parse_measure("weight", &form.weight, true)?;
    let diet: Diet = form.diet.parse()?;

    let height = feet * 12.0 + inches;
    if height <= 0.0 {
        return Err(DinoError::InvalidInput("height must be greater than zero".to_string()));
    }
    if weight <= 0.0 {
        return Err(DinoError::InvalidInput("weight must be greater than zero".to_string()));
    }

    Ok(HumanRecord {
        name: form.name.trim().to_string(),
        height,
        weight,
        diet,
    })
}
