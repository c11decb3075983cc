//! Разбор SOAP ответа n11 в дерево `serde_json::Value`

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::N11Error;

/// Тело ответа: имя элемента (например `GetCitiesResponse`) и его содержимое
#[derive(Debug, Clone, PartialEq)]
pub struct SoapResponse {
    pub element: String,
    pub body: Value,
}

struct Node {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> Value {
        if self.children.is_empty() {
            Value::String(self.text)
        } else {
            Value::Object(self.children)
        }
    }
}

/// Разобрать SOAP конверт.
///
/// Префиксы пространств имён отбрасываются. `Fault` в теле превращается
/// в `N11Error::SoapFault`.
pub fn parse_response(xml: &str) -> Result<SoapResponse, N11Error> {
    let (root_name, root) = xml_to_value(xml)?;
    if root_name != "Envelope" {
        return Err(N11Error::Xml(format!(
            "expected SOAP Envelope, got <{}>",
            root_name
        )));
    }

    let body = match root {
        Value::Object(mut envelope) => envelope.remove("Body"),
        _ => None,
    }
    .ok_or_else(|| N11Error::Xml("SOAP Envelope has no Body".into()))?;

    let mut body = match body {
        Value::Object(map) => map,
        _ => return Err(N11Error::Xml("SOAP Body is empty".into())),
    };

    if let Some(fault) = body.remove("Fault") {
        return Err(fault_to_error(&fault));
    }

    let (element, body) = body
        .into_iter()
        .next()
        .ok_or_else(|| N11Error::Xml("SOAP Body is empty".into()))?;

    Ok(SoapResponse { element, body })
}

/// SOAP 1.1 (faultcode/faultstring) и SOAP 1.2 (Code/Value, Reason/Text)
fn fault_to_error(fault: &Value) -> N11Error {
    let code = fault
        .get("faultcode")
        .and_then(Value::as_str)
        .or_else(|| fault.pointer("/Code/Value").and_then(Value::as_str))
        .unwrap_or("Server");
    let message = fault
        .get("faultstring")
        .and_then(Value::as_str)
        .or_else(|| fault.pointer("/Reason/Text").and_then(Value::as_str))
        .unwrap_or("");
    N11Error::SoapFault {
        code: code.to_string(),
        message: message.to_string(),
    }
}

/// XML -> (имя корня, значение). Повторяющиеся элементы собираются в массив.
pub fn xml_to_value(xml: &str) -> Result<(String, Value), N11Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(N11Error::Xml(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        };

        match event {
            Event::Start(e) => stack.push(Node::new(local_name(&e))),
            Event::Empty(e) => {
                let value = if is_nil(&e) {
                    Value::Null
                } else {
                    Value::String(String::new())
                };
                attach(&mut stack, &mut root, local_name(&e), value)?;
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| N11Error::Xml(e.to_string()))?;
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text);
                }
            }
            Event::CData(c) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| N11Error::Xml("unbalanced closing tag".into()))?;
                let name = node.name.clone();
                attach(&mut stack, &mut root, name, node.into_value())?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(N11Error::Xml("unexpected end of document".into()));
    }
    root.ok_or_else(|| N11Error::Xml("empty document".into()))
}

fn attach(
    stack: &mut [Node],
    root: &mut Option<(String, Value)>,
    name: String,
    value: Value,
) -> Result<(), N11Error> {
    match stack.last_mut() {
        Some(parent) => {
            insert_child(&mut parent.children, name, value);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some((name, value));
            Ok(())
        }
        None => Err(N11Error::Xml("multiple root elements".into())),
    }
}

fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn is_nil(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .flatten()
        .any(|a| a.key.local_name().as_ref() == b"nil" && &*a.value == b"true")
}
