//! Save/Load (spec §4.7): a channel as a flat JSON document via `serde_json`, the
//! teacher's serialization crate.
//!
//! Field order mirrors the property-tree order spec §4.7 calls for: `interpolation`,
//! `targetPath`, `times`, `values`, then `expression` last, since compiling it depends
//! on the value kind already being known from `values`.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::foundation::error::ChannelResult;
use crate::interpolate::InterpolationMode;
use crate::path::ChannelPath;
use crate::time_index::TimeFrame;
use crate::value::{Value, ValueKind};

#[derive(Serialize, Deserialize)]
struct SerializedChannel {
    interpolation: InterpolationMode,
    target_path: String,
    time_frame: TimeFrame,
    value_kind: ValueKind,
    times: Vec<f32>,
    values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expression: Option<String>,
}

/// Serialize `channel` to its canonical JSON form.
pub fn save_channel(channel: &Channel) -> ChannelResult<String> {
    let doc = SerializedChannel {
        interpolation: channel.interpolation(),
        target_path: channel.target().to_uri(true),
        time_frame: channel.time_frame(),
        value_kind: channel.value_kind(),
        times: channel.times().to_vec(),
        values: (0..channel.len()).map(|i| channel.get_value(i)).collect(),
        #[cfg(feature = "expr")]
        expression: channel.value_expression_source(),
        #[cfg(not(feature = "expr"))]
        expression: None,
    };
    serde_json::to_string_pretty(&doc).map_err(|e| crate::foundation::error::ChannelError::Invariant(e.to_string()))
}

/// Deserialize a channel previously produced by [`save_channel`]. A malformed or
/// unparsable `expression` field is logged as a warning and leaves the loaded channel
/// without an attached expression, rather than failing the whole load (spec §4.7).
pub fn load_channel(json: &str) -> ChannelResult<Channel> {
    let doc: SerializedChannel = serde_json::from_str(json)
        .map_err(|e| crate::foundation::error::ChannelError::Invariant(e.to_string()))?;

    let target = ChannelPath::parse(&doc.target_path);
    let mut channel = Channel::new(target, doc.value_kind);
    channel.set_interpolation(doc.interpolation);
    channel.set_time_frame(doc.time_frame);

    for (t, v) in doc.times.into_iter().zip(doc.values) {
        channel.add_value(t, v);
    }

    #[cfg(feature = "expr")]
    if let Some(src) = doc.expression {
        if let Err(err) = channel.set_value_expression(&src) {
            tracing::warn!(error = %err, "dropping expression that failed to recompile on load");
        }
    }
    #[cfg(not(feature = "expr"))]
    let _ = doc.expression;

    Ok(channel)
}

#[cfg(test)]
#[path = "../tests/unit/serialize.rs"]
mod tests;
