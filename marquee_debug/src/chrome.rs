// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads events recorded by a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use marquee_core::interaction::Routed;
use marquee_core::time::{HostTime, Timebase};

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Frames are global instants. Belt events are thread-scoped instants on the
/// belt's track (`tid` is the belt index), stamped with the time of the
/// latest preceding frame, or 0 before the first frame.
pub fn export(
    events: &[RecordedEvent],
    timebase: Timebase,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::with_capacity(events.len());
    let mut ts = 0.0;

    for recorded in events {
        match recorded {
            RecordedEvent::Frame(e) => {
                ts = host_us(e.now, timebase);
                out.push(json!({
                    "ph": "i",
                    "name": "Frame",
                    "cat": "Scheduler",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "frame_index": e.frame_index,
                        "dt_ms": e.dt * 1000.0,
                        "belts_moved": e.belts_moved,
                    }
                }));
            }
            RecordedEvent::Built(e) => {
                let name = if e.rebuilt { "Rebuild" } else { "Build" };
                out.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Belt",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.belt.index(),
                    "s": "t",
                    "args": {
                        "loop_length": e.loop_length,
                        "speed": e.speed,
                        "copies": e.copies,
                        "extent": e.extent,
                    }
                }));
            }
            RecordedEvent::Skipped(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Skip",
                    "cat": "Belt",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "reason": e.reason.as_str(),
                        "items": e.items,
                    }
                }));
            }
            RecordedEvent::Command(e) => {
                let routed = match e.routed {
                    Routed::Applied => "applied",
                    Routed::Snap { .. } => "snap",
                    Routed::Ignored => "ignored",
                };
                let mut args = json!({
                    "command": format!("{:?}", e.command),
                    "routed": routed,
                });
                if let Routed::Snap { item, target } = e.routed {
                    args["item"] = json!(item);
                    args["target"] = json!(target);
                }
                out.push(json!({
                    "ph": "i",
                    "name": "Command",
                    "cat": "Input",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.belt.index(),
                    "s": "t",
                    "args": args,
                }));
            }
            RecordedEvent::SnapBegin(e) => {
                out.push(json!({
                    "ph": "B",
                    "name": "Snap",
                    "cat": "Belt",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.belt.index(),
                    "args": {
                        "item": e.item,
                        "from": e.from,
                        "target": e.target,
                    }
                }));
            }
            RecordedEvent::SnapSettled(e) => {
                out.push(json!({
                    "ph": "E",
                    "name": "Snap",
                    "cat": "Belt",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.belt.index(),
                    "args": {
                        "frame_index": e.frame_index,
                        "position": e.position,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn host_us(t: HostTime, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use marquee_core::belt::BeltId;
    use marquee_core::clock::FrameTick;
    use marquee_core::interaction::{Command, Direction};
    use marquee_core::trace::{
        CommandEvent, FrameEvent, SnapBeginEvent, SnapSettledEvent, TraceSink,
    };

    fn frame(rec: &mut RecorderSink, frame_index: u64, now_us: u64) {
        let tick = FrameTick {
            now: HostTime(now_us),
            frame_index,
        };
        rec.on_frame(&FrameEvent::new(&tick, 0.016, 1));
    }

    fn parse(events: &[RecordedEvent]) -> Vec<Value> {
        let mut out = Vec::new();
        export(events, Timebase::MICROS, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        frame(&mut rec, 0, 1_000);
        rec.on_command(&CommandEvent {
            belt: BeltId(2),
            command: Command::Advance(Direction::Next),
            routed: Routed::Snap {
                item: 5,
                target: 480.0,
            },
        });
        rec.on_snap_begin(&SnapBeginEvent {
            belt: BeltId(2),
            item: 5,
            from: 400.0,
            target: 480.0,
        });
        frame(&mut rec, 1, 17_000);
        rec.on_snap_settled(&SnapSettledEvent {
            belt: BeltId(2),
            frame_index: 1,
            position: 480.0,
        });

        let parsed = parse(rec.events());
        assert_eq!(parsed.len(), 5);

        assert_eq!(parsed[0]["ph"], "i");
        assert_eq!(parsed[0]["name"], "Frame");
        assert_eq!(parsed[0]["ts"], 1000.0);

        // Belt events take the latest frame's timestamp and the belt's track.
        assert_eq!(parsed[1]["name"], "Command");
        assert_eq!(parsed[1]["ts"], 1000.0);
        assert_eq!(parsed[1]["tid"], 2);
        assert_eq!(parsed[1]["args"]["routed"], "snap");
        assert_eq!(parsed[1]["args"]["item"], 5);

        assert_eq!(parsed[2]["ph"], "B");
        assert_eq!(parsed[4]["ph"], "E");
        assert_eq!(parsed[4]["ts"], 17000.0);
    }

    #[test]
    fn export_empty_recording() {
        assert!(parse(&[]).is_empty(), "no events");
    }
}
