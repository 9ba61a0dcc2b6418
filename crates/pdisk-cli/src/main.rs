//! PDiskStudio CLI
//!
//! Renders the built-in Poincaré disk scenes to a self-contained HTML player,
//! a single SVG frame, or a numbered frame sequence for video encoding.
//!
//! # Usage
//!
//! ```bash
//! # Export a scene as an HTML player
//! pdisk ideal-triangle [output.html]
//!
//! # Render one frame at a given time
//! pdisk --svg rotating 4.0 spin.svg
//!
//! # Write a frame sequence for video encoding
//! pdisk --frames construction frames/
//!
//! # Build a scene from a JSON config
//! pdisk --from-config my_scene.json
//! ```

use std::path::{Path, PathBuf};
use std::process;

use pdisk_render::{export_frame_sequence, export_html, export_svg, RenderOptions, Viewport};
use pdisk_scene::config::SceneSpec;
use pdisk_scene::{catalog, Scene};

fn print_usage() {
    eprintln!(
        r#"PDiskStudio CLI

USAGE:
    pdisk <scene> [output.html]
    pdisk --svg <scene> <time> [output.svg]
    pdisk --frames <scene> [output_dir]
    pdisk --from-config <config.json> [output.html]
    pdisk --list

ARGS:
    <scene>         Name of a built-in scene (see --list)
    [output.html]   Optional output path (defaults to <scene>.html)

OPTIONS:
    --svg           Render a single frame at <time> seconds
    --frames        Write a numbered SVG frame sequence
    --from-config   Build the scene from a JSON config file
    --list          List the built-in scenes
    --help          Show this help message

EXAMPLES:
    # Export the ideal triangle scene as an HTML player
    pdisk ideal-triangle

    # One frame of the rotating scene, halfway through the spin
    pdisk --svg rotating 4.0 spin.svg

    # Frame sequence ready for video encoding
    pdisk --frames construction construction_frames

    # Adjust a scene through a config file
    pdisk --from-config my_scene.json out.html
"#
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Error: Missing required argument <scene>\n");
        print_usage();
        process::exit(1);
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_usage();
        process::exit(0);
    }

    if args[1] == "--list" {
        for name in catalog::names() {
            println!("{}", name);
        }
        return;
    }

    if args[1] == "--svg" {
        if args.len() < 4 {
            eprintln!("Error: --svg requires a scene name and a time in seconds\n");
            print_usage();
            process::exit(1);
        }

        let time: f64 = args[3].parse().unwrap_or_else(|_| {
            eprintln!("Error: Invalid time: {}", args[3]);
            process::exit(1);
        });
        let out = if args.len() > 4 {
            PathBuf::from(&args[4])
        } else {
            PathBuf::from(format!("{}.svg", args[2]))
        };

        let scene = load_scene(&args[2]);
        handle_svg_export(&scene, time, &out);
        return;
    }

    if args[1] == "--frames" {
        if args.len() < 3 {
            eprintln!("Error: --frames requires a scene name\n");
            print_usage();
            process::exit(1);
        }

        let out_dir = if args.len() > 3 {
            PathBuf::from(&args[3])
        } else {
            PathBuf::from(format!("{}_frames", args[2]))
        };

        let scene = load_scene(&args[2]);
        handle_frames_export(&scene, &out_dir);
        return;
    }

    if args[1] == "--from-config" {
        if args.len() < 3 {
            eprintln!("Error: --from-config requires a JSON config path\n");
            print_usage();
            process::exit(1);
        }

        let config_path = Path::new(&args[2]);
        let out = if args.len() > 3 {
            PathBuf::from(&args[3])
        } else {
            config_path.with_extension("html")
        };

        let scene = load_scene_from_config(config_path);
        handle_html_export(&scene, &out);
        return;
    }

    // Default mode: HTML player export
    let out = if args.len() > 2 {
        PathBuf::from(&args[2])
    } else {
        PathBuf::from(format!("{}.html", args[1]))
    };

    let scene = load_scene(&args[1]);
    handle_html_export(&scene, &out);
}

fn load_scene(name: &str) -> Scene {
    match catalog::by_name(name) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn load_scene_from_config(path: &Path) -> Scene {
    if !path.exists() {
        eprintln!("Error: Config file does not exist: {}", path.display());
        process::exit(1);
    }

    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config: {}", e);
        process::exit(1);
    });

    let spec: SceneSpec = match serde_json::from_str(&text) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            process::exit(1);
        }
    };

    match catalog::build(&spec) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_html_export(scene: &Scene, out: &Path) {
    eprintln!("╔════════════════════════════════════════════════════════════╗");
    eprintln!("║           PDiskStudio HTML Player Export                   ║");
    eprintln!("╚════════════════════════════════════════════════════════════╝");
    eprintln!();

    let opts = RenderOptions::default();
    eprintln!(
        "Scene: {} ({:.1} s at {} fps)",
        scene.name(),
        scene.duration(),
        opts.fps
    );

    match export_html(scene, &opts, &Viewport::standard(), out) {
        Ok(()) => {
            eprintln!("✓ Exported HTML player: {}", out.display());
            eprintln!();
            eprintln!("Open the file in a web browser to play the animation.");
        }
        Err(e) => {
            eprintln!("Error during export: {}", e);
            process::exit(1);
        }
    }
}

fn handle_svg_export(scene: &Scene, time: f64, out: &Path) {
    let opts = RenderOptions::default();
    let clamped = time.clamp(0.0, scene.duration());
    if clamped != time {
        eprintln!(
            "Note: time {} clamped to {:.2} (scene runs 0 to {:.1} s)",
            time,
            clamped,
            scene.duration()
        );
    }

    let frame = match scene.sample(clamped, opts.chord_tolerance) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("Error sampling frame: {}", e);
            process::exit(1);
        }
    };

    match export_svg(&frame, &Viewport::standard(), opts.background, out) {
        Ok(()) => {
            eprintln!("✓ Exported frame at t={:.2} s: {}", clamped, out.display());
        }
        Err(e) => {
            eprintln!("Error during export: {}", e);
            process::exit(1);
        }
    }
}

fn handle_frames_export(scene: &Scene, out_dir: &Path) {
    eprintln!("╔════════════════════════════════════════════════════════════╗");
    eprintln!("║           PDiskStudio Frame Sequence Export                ║");
    eprintln!("╚════════════════════════════════════════════════════════════╝");
    eprintln!();

    let opts = RenderOptions::default();
    eprintln!(
        "Scene: {} ({:.1} s at {} fps)",
        scene.name(),
        scene.duration(),
        opts.fps
    );

    match export_frame_sequence(scene, &opts, &Viewport::standard(), out_dir) {
        Ok(count) => {
            eprintln!("✓ Wrote {} frames to: {}", count, out_dir.display());
            eprintln!();
            eprintln!("To encode a video:");
            eprintln!(
                "  ffmpeg -framerate {} -i {}/frame_%04d.svg -pix_fmt yuv420p {}.mp4",
                opts.fps,
                out_dir.display(),
                scene.name()
            );
            eprintln!("  (needs an ffmpeg build with librsvg; otherwise rasterize with resvg first)");
        }
        Err(e) => {
            eprintln!("Error during export: {}", e);
            process::exit(1);
        }
    }
}
