//! Rendering helpers (XML) for preset documents.

use anyhow::Context;
use presetforge_types::josm::{AREA_MARKER_KEY, MATCH_NONE, PRESET_NAMESPACE};
use presetforge_types::preset::{Chunk, ItemNode, PresetDocument};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::debug;

type XmlWriter = Writer<Vec<u8>>;

const INDENT: usize = 2;

/// Serialize `doc` as a JOSM tagging-preset file.
pub fn render_preset_xml(doc: &PresetDocument) -> anyhow::Result<String> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .context("write xml declaration")?;

    let mut presets = BytesStart::new("presets");
    presets.push_attribute(("xmlns", PRESET_NAMESPACE));
    open(&mut w, presets)?;

    for chunk in &doc.chunks {
        write_chunk(&mut w, chunk).with_context(|| format!("write chunk {}", chunk.key()))?;
    }

    open(&mut w, named_group(&doc.root.name, &doc.root.icon))?;
    for group in &doc.root.groups {
        open(&mut w, named_group(&group.name, &group.icon))?;
        for subgroup in &group.subgroups {
            open(&mut w, named_group(&subgroup.name, &subgroup.icon))?;
            for item in &subgroup.items {
                write_item(&mut w, item).with_context(|| format!("write item {}", item.name))?;
            }
            close(&mut w, "group")?;
        }
        close(&mut w, "group")?;
    }
    close(&mut w, "group")?;
    close(&mut w, "presets")?;

    let mut xml = String::from_utf8(w.into_inner()).context("xml output is not utf-8")?;
    xml.push('\n');
    debug!(family = %doc.family, bytes = xml.len(), "rendered preset xml");
    Ok(xml)
}

fn write_chunk(w: &mut XmlWriter, chunk: &Chunk) -> anyhow::Result<()> {
    open(w, element("chunk", &[("id", chunk.key())]))?;
    match chunk {
        Chunk::List(list) => {
            for e in &list.entries {
                let display = e.display_value();
                let attrs = [("value", e.value.as_str()), ("display_value", display.as_str())];
                empty(w, element("list_entry", &attrs))?;
            }
        }
        Chunk::Combo(combo) => {
            let mut attrs = vec![
                ("key", combo.name.as_str()),
                ("text", combo.desc.as_str()),
                ("values_searchable", bool_attr(combo.values_searchable)),
            ];
            if let Some(default) = &combo.default {
                attrs.push(("default", default.as_str()));
            }
            open(w, element("combo", &attrs))?;
            empty(w, element("reference", &[("ref", combo.list_key.as_str())]))?;
            close(w, "combo")?;
        }
        Chunk::Text(text) => {
            let mut attrs = vec![("key", text.name.as_str()), ("text", text.desc.as_str())];
            if let Some(default) = &text.default {
                attrs.push(("default", default.as_str()));
            }
            if let Some(length) = &text.length {
                attrs.push(("length", length.as_str()));
            }
            empty(w, element("text", &attrs))?;
        }
    }
    close(w, "chunk")
}

fn write_item(w: &mut XmlWriter, item: &ItemNode) -> anyhow::Result<()> {
    open(
        w,
        element(
            "item",
            &[
                ("name", item.name.as_str()),
                ("type", item.geometry.type_hint()),
                ("preset_name_label", bool_attr(true)),
            ],
        ),
    )?;
    let key = [
        ("key", item.key_attribute.as_str()),
        ("value", item.fcode.as_str()),
    ];
    empty(w, element("key", &key))?;
    if let Some(marker) = item.area_marker {
        empty(
            w,
            element(
                "key",
                &[
                    ("key", AREA_MARKER_KEY),
                    ("value", marker.tag_value()),
                    ("match", MATCH_NONE),
                ],
            ),
        )?;
    }
    for r in &item.references {
        empty(w, element("reference", &[("ref", r.as_str())]))?;
    }
    close(w, "item")
}

fn named_group<'a>(name: &'a str, icon: &'a str) -> BytesStart<'a> {
    element("group", &[("name", name), ("icon", icon)])
}

fn element<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for &(k, v) in attrs {
        start.push_attribute((k, v));
    }
    start
}

fn open(w: &mut XmlWriter, start: BytesStart<'_>) -> anyhow::Result<()> {
    w.write_event(Event::Start(start)).context("write start tag")?;
    Ok(())
}

fn empty(w: &mut XmlWriter, start: BytesStart<'_>) -> anyhow::Result<()> {
    w.write_event(Event::Empty(start)).context("write empty tag")?;
    Ok(())
}

fn close(w: &mut XmlWriter, name: &str) -> anyhow::Result<()> {
    w.write_event(Event::End(BytesEnd::new(name)))
        .with_context(|| format!("write end tag {name}"))?;
    Ok(())
}

fn bool_attr(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}
