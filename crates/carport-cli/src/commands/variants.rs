//! Supported vehicle variants

use std::str::FromStr;

use anyhow::Result;
use can_chrysler_protocol::ChryslerVariant;

use crate::error::CliError;
use crate::output;

pub fn execute(name: Option<&str>, json: bool) -> Result<()> {
    match name {
        Some(name) => {
            let variant =
                ChryslerVariant::from_str(name).map_err(|source| CliError::UnknownVariant {
                    name: name.to_string(),
                    source,
                })?;
            output::print_variant(variant, json);
        }
        None => output::print_variant_list(&ChryslerVariant::ALL, json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_is_reported_by_name() {
        let result = execute(Some("DELOREAN_1981"), true);
        assert!(matches!(
            result.as_ref().map_err(|e| e.downcast_ref::<CliError>()),
            Err(Some(CliError::UnknownVariant { name, .. })) if name == "DELOREAN_1981"
        ));
    }
}
