//! The scene: an element arena plus a cue timeline, sampled into frames.
//!
//! Sampling is stateless. A frame at time `t` is computed by scanning every
//! cue's effect on every element, so frames can be rendered in any order or
//! in parallel.

use pdisk_core::{PdiskError, Result, Validate};
use pdisk_math::{angle, Aabb2};
use slotmap::{SecondaryMap, SlotMap};

use crate::element::{Element, ElementId, ElementKind, Modulation};
use crate::frame::Frame;
use crate::timeline::{Action, Cue};

pub struct Scene {
    name: String,
    pub elements: SlotMap<ElementId, Element>,
    pub cues: Vec<Cue>,
    births: SecondaryMap<ElementId, f64>,
    cursor: f64,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: SlotMap::with_key(),
            cues: Vec::new(),
            births: SecondaryMap::new(),
            cursor: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an element. It becomes visible at the current timeline position
    /// unless an intro action targets it later.
    pub fn add(&mut self, element: Element) -> ElementId {
        let id = self.elements.insert(element);
        self.births.insert(id, self.cursor);
        id
    }

    /// Play a cue at the current timeline position and advance past it.
    pub fn play(&mut self, mut cue: Cue) {
        cue.start = self.cursor;
        self.cursor += cue.span();
        self.cues.push(cue);
    }

    /// Hold the current state for `seconds`.
    pub fn wait(&mut self, seconds: f64) {
        self.cursor += seconds;
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.cursor
    }

    /// Start time of cue `index`, in play order.
    pub fn cue_start(&self, index: usize) -> Option<f64> {
        self.cues.get(index).map(|c| c.start)
    }

    /// Resolve one element's timeline state at `time`. `None` means the
    /// element is not visible.
    fn modulation(&self, id: ElementId, time: f64) -> Option<Modulation> {
        let birth = self.births.get(id).copied().unwrap_or(0.0);
        if time < birth {
            return None;
        }

        let mut m = Modulation::default();
        let mut intro_starts: Vec<f64> = Vec::new();
        let mut faded_out_at: Option<f64> = None;

        for cue in &self.cues {
            for (k, (target, action)) in cue.actions.iter().enumerate() {
                if *target != id {
                    continue;
                }
                let (s, e) = cue.action_window(k);
                let p = ((time - s) / cue.run_time).clamp(0.0, 1.0);
                let eased = cue.easing.apply(p);

                match action {
                    Action::Draw => {
                        intro_starts.push(s);
                        if time < e {
                            m.reveal = eased;
                        }
                    }
                    Action::Write | Action::FadeIn => {
                        intro_starts.push(s);
                        if time < e {
                            m.opacity *= eased;
                        }
                    }
                    Action::FadeOut => {
                        if time >= e {
                            faded_out_at = Some(faded_out_at.unwrap_or(e).max(e));
                        } else if time > s {
                            m.opacity *= 1.0 - eased;
                        }
                    }
                    Action::Rotate { from, to } => {
                        m.angle_offset += angle::lerp(*from, *to, eased);
                    }
                    Action::SwapText { to } => {
                        if time >= e {
                            m.text_override = Some(to.clone());
                        } else if time > s {
                            // Crossfade on raw progress: old text dims out,
                            // new text brightens in after the halfway switch
                            m.opacity *= (2.0 * p - 1.0).abs();
                            if p >= 0.5 {
                                m.text_override = Some(to.clone());
                            }
                        }
                    }
                }
            }
        }

        // An intro keeps its target hidden until the earliest one starts
        if let Some(first) = intro_starts.iter().copied().reduce(f64::min) {
            if time < first {
                return None;
            }
        }

        // A completed fade-out hides the element unless a later intro
        // brings it back
        if let Some(out_end) = faded_out_at {
            let reintroduced = intro_starts
                .iter()
                .any(|&s| s >= out_end && time >= s);
            if !reintroduced {
                return None;
            }
        }

        Some(m)
    }

    /// Sample the scene into a frame at `time`.
    ///
    /// `tess_tol` is the tessellation chord tolerance in world units.
    pub fn sample(&self, time: f64, tess_tol: f64) -> Result<Frame> {
        let mut drawables = Vec::new();
        for (id, element) in &self.elements {
            if let Some(m) = self.modulation(id, time) {
                element.emit(&m, tess_tol, &mut drawables)?;
            }
        }
        Ok(Frame { time, drawables })
    }

    /// Bounding box of the fully played-out scene.
    pub fn bounds(&self, tess_tol: f64) -> Result<Option<Aabb2>> {
        Ok(self.sample(self.duration(), tess_tol)?.bounds())
    }
}

impl Validate for Scene {
    fn validate(&self) -> Result<()> {
        // 1. Every cue action targets a live element
        for (ci, cue) in self.cues.iter().enumerate() {
            if cue.run_time <= 0.0 {
                return Err(PdiskError::Scene(format!(
                    "cue {} has non-positive run time {}",
                    ci, cue.run_time
                )));
            }
            if cue.lag < 0.0 {
                return Err(PdiskError::Scene(format!(
                    "cue {} has negative lag ratio {}",
                    ci, cue.lag
                )));
            }
            for (target, action) in &cue.actions {
                let element = self.elements.get(*target).ok_or_else(|| {
                    PdiskError::Scene(format!("cue {} targets a removed element", ci))
                })?;

                // 2. Text actions apply to labels, curve actions to curves
                let is_label = matches!(element.kind, ElementKind::Label { .. });
                match action {
                    Action::Write | Action::SwapText { .. } if !is_label => {
                        return Err(PdiskError::Scene(format!(
                            "cue {} applies a text action to '{}'",
                            ci, element.name
                        )));
                    }
                    Action::Draw if is_label => {
                        return Err(PdiskError::Scene(format!(
                            "cue {} draws label '{}'; use a write action",
                            ci, element.name
                        )));
                    }
                    Action::Rotate { .. } => {
                        let rotatable = matches!(
                            element.kind,
                            ElementKind::Triangle { .. }
                                | ElementKind::GeodesicArc { .. }
                                | ElementKind::Dots { .. }
                        );
                        if !rotatable {
                            return Err(PdiskError::Scene(format!(
                                "cue {} rotates '{}', which has no boundary angles",
                                ci, element.name
                            )));
                        }
                    }
                    _ => {}
                }
            }
        }

        // 3. Elements are structurally sound and constructible
        for (_, element) in &self.elements {
            element.validate()?;
            let mut scratch = Vec::new();
            element.emit(&Modulation::default(), 1e-2, &mut scratch)?;
        }

        Ok(())
    }
}
