//! Applies parsed commands to a scene.
//!
//! Points and circles go through the configured [`ShapeFactory`]. A triangle
//! is held back as the *pending triangle* until either an `F` command wraps
//! it in [`Filled`] or the command stream ends, in which case it is
//! registered undecorated.

use log::{debug, warn};
use serde::Deserialize;

use vignette_core::{
    factory::ShapeFactory,
    scene::Scene,
    shape::{Appearance, Filled, TriangleAdapter},
};
use vignette_parser::{Command, Diagnostic, Span, Spanned, error::ErrorCode};

/// What happens to an unfilled triangle when another triangle is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingTrianglePolicy {
    /// The earlier triangle is dropped and a warning is reported.
    #[default]
    LastWins,
    /// The earlier triangle is registered undecorated where it is displaced.
    KeepAll,
}

/// Summary of a successful build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    commands: usize,
    objects: usize,
    warnings: Vec<Diagnostic>,
}

impl BuildReport {
    /// Number of commands applied.
    pub fn commands(&self) -> usize {
        self.commands
    }

    /// Number of top-level objects in the scene after the build.
    pub fn objects(&self) -> usize {
        self.objects
    }

    /// Parser and builder warnings, in the order they were raised.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Drives one build over an already cleared scene.
pub(crate) struct SceneAssembler<'a> {
    factory: &'a dyn ShapeFactory,
    policy: PendingTrianglePolicy,
    scene: &'a mut Scene,
    pending: Option<Spanned<TriangleAdapter>>,
    warnings: Vec<Diagnostic>,
}

impl<'a> SceneAssembler<'a> {
    pub(crate) fn new(
        factory: &'a dyn ShapeFactory,
        policy: PendingTrianglePolicy,
        scene: &'a mut Scene,
    ) -> Self {
        Self {
            factory,
            policy,
            scene,
            pending: None,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn apply(&mut self, command: Spanned<Command>) {
        let span = command.span();
        match command.into_inner() {
            Command::Point { x, y } => self.factory.create_point(self.scene, x, y),
            Command::Circle { cx, cy, r } => self.factory.create_circle(self.scene, cx, cy, r),
            Command::Triangle { coords } => {
                // Triangles are colored regardless of the factory family.
                let triangle = TriangleAdapter::from_coords(coords, Appearance::Color);
                self.hold_triangle(Spanned::new(triangle, span));
            }
            Command::Fill => self.fill_pending(span),
        }
    }

    fn hold_triangle(&mut self, triangle: Spanned<TriangleAdapter>) {
        let span = triangle.span();
        let Some(displaced) = self.pending.replace(triangle) else {
            return;
        };

        match self.policy {
            PendingTrianglePolicy::LastWins => {
                self.notice(
                    Diagnostic::warning("pending triangle discarded without being filled")
                        .with_code(ErrorCode::E201)
                        .with_label(span, "replaced by this triangle")
                        .with_secondary_label(displaced.span(), "this triangle is dropped")
                        .with_help("add `F` after a triangle to keep it, or set `pending_triangle = \"keep_all\"`"),
                );
            }
            PendingTrianglePolicy::KeepAll => {
                debug!(span:? = displaced.span(); "Registering displaced triangle");
                self.scene.add_object(Box::new(displaced.into_inner()));
            }
        }
    }

    fn fill_pending(&mut self, span: Span) {
        match self.pending.take() {
            Some(triangle) => {
                let filled = Filled::new(Box::new(triangle.into_inner()));
                self.scene.add_object(Box::new(filled));
            }
            None => self.notice(
                Diagnostic::warning("nothing to fill")
                    .with_code(ErrorCode::E200)
                    .with_label(span, ErrorCode::E200.description())
                    .with_help("`F` fills the triangle built by the preceding `T`"),
            ),
        }
    }

    fn notice(&mut self, diagnostic: Diagnostic) {
        self.warnings.push(diagnostic);
    }

    /// Registers a remaining pending triangle and returns the builder warnings.
    pub(crate) fn finish(mut self) -> Vec<Diagnostic> {
        if let Some(triangle) = self.pending.take() {
            self.scene.add_object(Box::new(triangle.into_inner()));
        }
        self.warnings
    }
}

/// Runs every command against `scene` and assembles the report.
pub(crate) fn assemble(
    factory: &dyn ShapeFactory,
    policy: PendingTrianglePolicy,
    scene: &mut Scene,
    commands: Vec<Spanned<Command>>,
    parse_warnings: Vec<Diagnostic>,
) -> BuildReport {
    let command_count = commands.len();

    let mut assembler = SceneAssembler::new(factory, policy, scene);
    for command in commands {
        assembler.apply(command);
    }
    let builder_warnings = assembler.finish();

    let mut warnings = parse_warnings;
    warnings.extend(builder_warnings);
    warnings.sort_by_key(|diag| diag.primary_span().map_or(0, |span| span.start()));

    for diag in &warnings {
        warn!(code:? = diag.code(); "{diag}");
    }

    BuildReport {
        commands: command_count,
        objects: scene.len(),
        warnings,
    }
}
