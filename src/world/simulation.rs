use crate::{
    collision::{self, ContactPair},
    common::{validate_region, EngineError, Result, SimulationConfig},
    constraints::{BoundsHandler, BoundsHit, IgnoreBounds, ReflectVelocity},
    integration::integrator,
    math::Rect,
    objects::MovingBody,
};

/// A correction applied to one of the simulation's bodies during the last step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyBoundsHit {
    pub body_idx: usize,
    pub hit: BoundsHit,
}

/// Owns a set of bodies and advances them in fixed steps.
///
/// Each step runs two strictly sequential passes: every body is integrated and clamped
/// to its region, then every pair of bodies is classified against the settled positions.
/// No body is written while another one is being read.
pub struct Simulation {
    pub bodies: Vec<MovingBody>,
    pub config: SimulationConfig,
    // Results of the last step
    pub contacts: Vec<ContactPair>,
    pub bounds_hits: Vec<BodyBoundsHit>,
}

impl Simulation {
    /// Creates an empty simulation after validating `config`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            config,
            contacts: Vec::new(),
            bounds_hits: Vec::new(),
        })
    }

    /// Adds a body and returns its index.
    ///
    /// A body without its own region is bound to the configured one, if any.
    pub fn add_body(&mut self, mut body: MovingBody) -> usize {
        if body.region.is_none() {
            body.region = self.config.region;
        }
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn body(&self, idx: usize) -> Result<&MovingBody> {
        self.bodies.get(idx).ok_or(EngineError::BodyNotFound(idx))
    }

    pub fn body_mut(&mut self, idx: usize) -> Result<&mut MovingBody> {
        self.bodies.get_mut(idx).ok_or(EngineError::BodyNotFound(idx))
    }

    /// Binds a body to `region`, or unbinds it with `None`.
    pub fn set_region(&mut self, idx: usize, region: Option<Rect>) -> Result<()> {
        if let Some(region) = &region {
            validate_region(region)?;
        }
        let body = self.body_mut(idx)?;
        match region {
            Some(region) => body.bind(region),
            None => body.unbind(),
        }
        Ok(())
    }

    /// Advances the simulation by the configured time step.
    pub fn step(&mut self) {
        // Checked when the config was validated in `new`
        self.advance(self.config.time_step);
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// `dt` must be positive and finite, like the configured time step.
    pub fn step_with(&mut self, dt: f64) -> Result<()> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(EngineError::InvalidTimeStep(dt));
        }
        self.advance(dt);
        Ok(())
    }

    fn advance(&mut self, dt: f64) {
        if self.config.reflect_on_bounds {
            let mut handler = ReflectVelocity::new(self.config.restitution);
            self.move_bodies(dt, &mut handler);
        } else {
            self.move_bodies(dt, &mut IgnoreBounds);
        }
        self.check_contacts();

        tracing::trace!(
            bodies = self.bodies.len(),
            bounds_hits = self.bounds_hits.len(),
            contacts = self.contacts.len(),
            "simulation step complete"
        );
    }

    /// Integrates every body and keeps it inside its region.
    fn move_bodies<H: BoundsHandler>(&mut self, dt: f64, handler: &mut H) {
        self.bounds_hits.clear();
        for (body_idx, body) in self.bodies.iter_mut().enumerate() {
            if let Some(hit) = integrator::step_body(body, dt, &mut *handler) {
                self.bounds_hits.push(BodyBoundsHit { body_idx, hit });
            }
        }
    }

    /// Classifies every pair of bodies in both directions and records each hit.
    ///
    /// The classifier only looks at the first body's velocity, so a touching pair can
    /// produce two entries with different normals, one per body.
    pub fn check_contacts(&mut self) {
        self.contacts.clear();

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                self.record_contact(i, j);
                self.record_contact(j, i);
            }
        }
    }

    fn record_contact(&mut self, a: usize, b: usize) {
        let contact = collision::classify(&self.bodies[a], &self.bodies[b]);
        if let Some(normal) = contact.normal() {
            tracing::trace!(body_a = a, body_b = b, ?normal, "contact");
            self.contacts.push(ContactPair {
                body_a_idx: a,
                body_b_idx: b,
                normal,
            });
        }
    }
}
