// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter formatting, RFC 5545 Section 3.2.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::parameter::Parameters;
use crate::syntax::RawParameter;

/// Writes every parameter, each prefixed with a semicolon.
pub fn write_parameters<W: Write>(f: &mut Formatter<W>, parameters: &Parameters) -> io::Result<()> {
    for param in parameters {
        write_parameter(f, param.name(), param.values())?;
    }
    Ok(())
}

/// Writes undecoded parameters, as kept by experimental components.
pub fn write_raw_parameters<W: Write>(
    f: &mut Formatter<W>,
    parameters: &[RawParameter],
) -> io::Result<()> {
    for param in parameters {
        write_parameter(f, &param.name, param.values.iter().map(String::as_str))?;
    }
    Ok(())
}

fn write_parameter<W: Write, S: AsRef<str>>(
    f: &mut Formatter<W>,
    name: &str,
    values: impl IntoIterator<Item = S>,
) -> io::Result<()> {
    write!(f, ";{name}=")?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_all(b",")?;
        }
        write!(f, "{}", quote_if_needed(value.as_ref())?)?;
    }
    Ok(())
}

/// Double-quotes a parameter value containing `; : ,`. A value holding a
/// double quote has no valid form.
fn quote_if_needed(s: &str) -> io::Result<Cow<'_, str>> {
    if s.contains('"') {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("double quote in parameter value {s:?}"),
        ))
    } else if s.contains([';', ':', ',']) {
        Ok(Cow::Owned(format!("\"{s}\"")))
    } else {
        Ok(Cow::Borrowed(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::FormatOptions;
    use crate::parameter::Parameter;

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("simple").unwrap(), "simple");
        assert_eq!(quote_if_needed("Asia/Tokyo").unwrap(), "Asia/Tokyo");
        assert_eq!(quote_if_needed("with;semicolon").unwrap(), "\"with;semicolon\"");
        assert_eq!(quote_if_needed("with:colon").unwrap(), "\"with:colon\"");
        assert_eq!(quote_if_needed("with,comma").unwrap(), "\"with,comma\"");

        let err = quote_if_needed("say \"hi\"").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn refuses_to_write_double_quotes() {
        let mut params = Parameters::new();
        params.set(Parameter::CommonName("Jane \"JD\" Doe".to_string()));

        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        let err = write_parameters(&mut f, &params).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn writes_multi_valued_parameters() {
        let mut params = Parameters::new();
        params.set(Parameter::TzId("Asia/Tokyo".to_string()));
        params.set(Parameter::Other {
            name: "X-A".to_string(),
            values: vec!["b".to_string(), "c;d".to_string()],
        });

        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        write_parameters(&mut f, &params).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            r#";TZID=Asia/Tokyo;X-A=b,"c;d""#
        );
    }
}
