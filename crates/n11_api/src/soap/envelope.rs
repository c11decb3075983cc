//! Сборка SOAP 1.1 запроса для n11

use contracts::enums::n11_service::{N11Operation, N11_SCHEMA_NAMESPACE};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

use super::ParamMap;
use crate::error::N11Error;

pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

const ENV_PREFIX: &str = "soapenv";
const SCHEMA_PREFIX: &str = "sch";

/// Собрать конверт запроса: `<sch:{Operation}Request>` с параметрами внутри.
///
/// Параметры пишутся в порядке вставки, массивы становятся повторяющимися
/// элементами, `null` пропускается.
pub fn build_request_envelope(
    operation: N11Operation,
    params: &ParamMap,
) -> Result<String, N11Error> {
    let mut writer = Writer::new(Vec::new());

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let envelope_tag = format!("{}:Envelope", ENV_PREFIX);
    let mut envelope = BytesStart::new(envelope_tag.as_str());
    envelope.push_attribute((format!("xmlns:{}", ENV_PREFIX).as_str(), SOAP_ENV_NAMESPACE));
    envelope.push_attribute((format!("xmlns:{}", SCHEMA_PREFIX).as_str(), N11_SCHEMA_NAMESPACE));
    write(&mut writer, Event::Start(envelope))?;

    let header_tag = format!("{}:Header", ENV_PREFIX);
    write(&mut writer, Event::Empty(BytesStart::new(header_tag.as_str())))?;

    let body_tag = format!("{}:Body", ENV_PREFIX);
    write(&mut writer, Event::Start(BytesStart::new(body_tag.as_str())))?;

    let request_tag = format!("{}:{}", SCHEMA_PREFIX, operation.request_element());
    write(&mut writer, Event::Start(BytesStart::new(request_tag.as_str())))?;
    for (key, value) in params {
        write_value(&mut writer, key, value)?;
    }
    write(&mut writer, Event::End(BytesEnd::new(request_tag.as_str())))?;

    write(&mut writer, Event::End(BytesEnd::new(body_tag.as_str())))?;
    write(&mut writer, Event::End(BytesEnd::new(envelope_tag.as_str())))?;

    String::from_utf8(writer.into_inner()).map_err(|e| N11Error::Xml(e.to_string()))
}

fn write_value(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<(), N11Error> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => {
            for item in items {
                write_value(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(children) => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            for (key, child) in children {
                write_value(writer, key, child)?;
            }
            write(writer, Event::End(BytesEnd::new(name)))
        }
        Value::String(text) => write_text_element(writer, name, text),
        Value::Number(n) => write_text_element(writer, name, &n.to_string()),
        Value::Bool(b) => write_text_element(writer, name, if *b { "true" } else { "false" }),
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), N11Error> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    if !text.is_empty() {
        write(writer, Event::Text(BytesText::new(text)))?;
    }
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), N11Error> {
    writer
        .write_event(event)
        .map_err(|e| N11Error::Xml(e.to_string()))
}
