//! Standalone HTML player: every sampled frame embedded as JSON, replayed on
//! a 2D canvas with play/pause and a scrubber.

use std::io::Write;
use std::path::Path;

use pdisk_core::{PdiskError, Result};
use pdisk_scene::Scene;

use crate::sequence::{sample_frames, RenderOptions};
use crate::svg::escape_xml;
use crate::viewport::Viewport;

/// Export a scene as a self-contained HTML file.
///
/// Frames are pre-sampled at `opts.fps` and embedded as JSON; a small script
/// replays them on a canvas. The file needs no network access.
pub fn export_html(
    scene: &Scene,
    opts: &RenderOptions,
    viewport: &Viewport,
    path: &Path,
) -> Result<()> {
    let frames = sample_frames(scene, opts)?;
    // "</" in label text would terminate the inline <script> block; "<\/"
    // spells the same string in both JSON and JS source.
    let frame_json = serde_json::to_string(&frames)
        .map_err(|e| PdiskError::Scene(format!("frame serialization failed: {}", e)))?
        .replace("</", "<\\/");
    let title = escape_xml(scene.name());

    let mut file = std::fs::File::create(path)?;

    write!(file, r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>pdisk: {}</title>
    <style>
        body {{
            margin: 0;
            background: #1a1a1a;
            color: #ddd;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            display: flex;
            flex-direction: column;
            align-items: center;
        }}
        #info {{
            width: {}px;
            max-width: 95vw;
            display: flex;
            justify-content: space-between;
            padding: 12px 0 8px 0;
            font-size: 14px;
        }}
        #info #meta {{
            color: #888;
        }}
        canvas {{
            max-width: 95vw;
            border: 1px solid #333;
        }}
        #controls {{
            width: {}px;
            max-width: 95vw;
            display: flex;
            align-items: center;
            gap: 10px;
            padding: 12px 0;
        }}
        #controls button {{
            background: #333;
            color: #eee;
            border: 1px solid #555;
            border-radius: 3px;
            padding: 5px 14px;
            cursor: pointer;
        }}
        #scrub {{
            flex: 1;
        }}
        #clock {{
            font-size: 13px;
            color: #aaa;
            min-width: 90px;
            text-align: right;
        }}
    </style>
</head>
<body>
    <div id="info"><span>{}</span><span id="meta">{} frames &middot; {} fps</span></div>
    <canvas id="canvas" width="{}" height="{}"></canvas>
    <div id="controls">
        <button id="play">Pause</button>
        <input id="scrub" type="range" min="0" max="{}" value="0" step="1">
        <span id="clock"></span>
    </div>
    <script>
"#,
        title,
        viewport.width,
        viewport.width,
        title,
        frames.len(),
        opts.fps,
        viewport.width,
        viewport.height,
        frames.len().saturating_sub(1)
    )?;

    // Embed the frame data
    writeln!(file, "        const frames = {};", frame_json)?;
    writeln!(file, "        const fps = {};", opts.fps)?;
    writeln!(
        file,
        "        const view = {{ width: {}, height: {}, scale: {}, cx: {}, cy: {} }};",
        viewport.width,
        viewport.height,
        viewport.scale(),
        viewport.center.x,
        viewport.center.y
    )?;
    writeln!(
        file,
        "        const background = '{}';",
        opts.background.to_hex()
    )?;

    // Player
    write!(file, r#"
        const canvas = document.getElementById('canvas');
        const ctx = canvas.getContext('2d');
        const strokeScale = view.height / 720;
        const duration = frames.length > 0 ? frames[frames.length - 1].time : 0;

        function sx(p) {{ return view.width / 2 + (p[0] - view.cx) * view.scale; }}
        function sy(p) {{ return view.height / 2 - (p[1] - view.cy) * view.scale; }}

        function pathLength(pts, closed) {{
            let len = 0;
            for (let i = 1; i < pts.length; i++) {{
                len += Math.hypot(sx(pts[i]) - sx(pts[i - 1]), sy(pts[i]) - sy(pts[i - 1]));
            }}
            if (closed && pts.length > 1) {{
                const last = pts[pts.length - 1];
                len += Math.hypot(sx(pts[0]) - sx(last), sy(pts[0]) - sy(last));
            }}
            return len;
        }}

        function drawFrame(index) {{
            const frame = frames[index];
            ctx.setLineDash([]);
            ctx.globalAlpha = 1;
            ctx.fillStyle = background;
            ctx.fillRect(0, 0, view.width, view.height);

            for (const d of frame.drawables) {{
                const shape = d.shape;
                if (shape.kind === 'polyline') {{
                    ctx.beginPath();
                    shape.points.forEach((p, i) => i === 0 ? ctx.moveTo(sx(p), sy(p)) : ctx.lineTo(sx(p), sy(p)));
                    if (shape.closed) ctx.closePath();
                    if (d.fill) {{
                        ctx.globalAlpha = d.fill.opacity * d.opacity;
                        ctx.fillStyle = d.fill.color;
                        ctx.fill();
                    }}
                    if (d.stroke) {{
                        ctx.globalAlpha = d.opacity;
                        ctx.strokeStyle = d.stroke.color;
                        ctx.lineWidth = d.stroke.width * strokeScale;
                        ctx.lineCap = 'round';
                        ctx.lineJoin = 'round';
                        if (d.reveal < 1) {{
                            const len = pathLength(shape.points, shape.closed);
                            ctx.setLineDash([len, len]);
                            ctx.lineDashOffset = (1 - d.reveal) * len;
                        }}
                        ctx.stroke();
                        ctx.setLineDash([]);
                        ctx.lineDashOffset = 0;
                    }}
                }} else if (shape.kind === 'dot') {{
                    ctx.beginPath();
                    ctx.arc(sx(shape.center), sy(shape.center), shape.radius * view.scale, 0, 2 * Math.PI);
                    if (d.fill) {{
                        ctx.globalAlpha = d.fill.opacity * d.opacity;
                        ctx.fillStyle = d.fill.color;
                        ctx.fill();
                    }}
                }} else if (shape.kind === 'text') {{
                    if (d.fill) {{
                        ctx.globalAlpha = d.fill.opacity * d.opacity;
                        ctx.fillStyle = d.fill.color;
                    }}
                    ctx.font = (shape.font_size * strokeScale) + 'px sans-serif';
                    ctx.textAlign = 'center';
                    ctx.textBaseline = 'middle';
                    ctx.fillText(shape.content, sx(shape.position), sy(shape.position));
                }}
                ctx.globalAlpha = 1;
            }}
        }}

        const playButton = document.getElementById('play');
        const scrub = document.getElementById('scrub');
        const clock = document.getElementById('clock');

        let current = 0;
        let playing = true;
        let last = performance.now();
        let acc = 0;

        function show(index) {{
            current = Math.max(0, Math.min(frames.length - 1, index));
            scrub.value = current;
            clock.textContent = frames[current].time.toFixed(2) + ' / ' + duration.toFixed(2) + ' s';
            drawFrame(current);
        }}

        playButton.addEventListener('click', () => {{
            playing = !playing;
            playButton.textContent = playing ? 'Pause' : 'Play';
            if (playing) {{
                if (current >= frames.length - 1) show(0);
                last = performance.now();
                acc = 0;
            }}
        }});

        scrub.addEventListener('input', () => {{
            playing = false;
            playButton.textContent = 'Play';
            show(parseInt(scrub.value, 10));
        }});

        function tick(now) {{
            if (playing) {{
                acc += (now - last) / 1000;
                const step = Math.floor(acc * fps);
                if (step > 0) {{
                    acc -= step / fps;
                    if (current + step >= frames.length - 1) {{
                        show(frames.length - 1);
                        playing = false;
                        playButton.textContent = 'Play';
                    }} else {{
                        show(current + step);
                    }}
                }}
            }}
            last = now;
            requestAnimationFrame(tick);
        }}

        show(0);
        requestAnimationFrame(tick);
    </script>
</body>
</html>
"#)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdisk_math::Point2;
    use pdisk_scene::{Action, Color, Cue, Element, ElementKind, Stroke};

    fn tiny_scene() -> Scene {
        let mut scene = Scene::new("tiny");
        let boundary = scene.add(Element::new(
            "boundary",
            ElementKind::Disk {
                radius: 1.0,
                stroke: Stroke::new(Color::WHITE, 2.0),
            },
        ));
        scene.play(Cue::new().act(boundary, Action::Draw));
        scene
    }

    #[test]
    fn test_export_is_self_contained() {
        let file = tempfile::NamedTempFile::new().unwrap();

        export_html(
            &tiny_scene(),
            &RenderOptions::default(),
            &Viewport::standard(),
            file.path(),
        )
        .unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("<!DOCTYPE html>"));
        assert!(content.contains("pdisk: tiny"));
        assert!(content.contains("const frames = "));
        assert!(content.contains("getContext('2d')"));
        // No CDN scripts; the player must work offline.
        assert!(!content.contains("https://"));
    }

    #[test]
    fn test_embedded_frames_parse_back() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let scene = tiny_scene();

        export_html(
            &scene,
            &RenderOptions::default(),
            &Viewport::standard(),
            file.path(),
        )
        .unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let line = content
            .lines()
            .find(|l| l.trim_start().starts_with("const frames = "))
            .unwrap();
        let json = line
            .trim()
            .strip_prefix("const frames = ")
            .unwrap()
            .strip_suffix(';')
            .unwrap();

        let frames: serde_json::Value = serde_json::from_str(json).unwrap();
        let arr = frames.as_array().unwrap();
        assert_eq!(arr.len(), 31); // 1 s at 30 fps, inclusive
        assert_eq!(arr[0]["time"], 0.0);
        assert_eq!(arr[0]["drawables"][0]["name"], "boundary");
        assert_eq!(arr[0]["drawables"][0]["shape"]["kind"], "polyline");
    }

    #[test]
    fn test_label_text_cannot_close_the_script_block() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut scene = Scene::new("hostile");
        let label = scene.add(Element::new(
            "note",
            ElementKind::Label {
                content: "a </script> b".into(),
                position: Point2::new(0.0, 3.0),
                font_size: 36.0,
                color: Color::WHITE,
            },
        ));
        scene.play(Cue::new().act(label, Action::Write));

        export_html(
            &scene,
            &RenderOptions::default(),
            &Viewport::standard(),
            file.path(),
        )
        .unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        // Only the player's own closing tag may appear verbatim.
        assert_eq!(content.matches("</script>").count(), 1);
        assert!(content.contains(r"<\/script>"));
    }
}
