//! Mounted overlay instances
//!
//! An [`OverlayInstance`] owns the ephemeral state of one displayed overlay:
//! the current slide, the hover-pause flag, the particle placement of its
//! effect layer, and the scheduler holding its recurring tasks. Instances
//! share nothing with each other.
//!
//! The host drives time with [`OverlayInstance::advance`] (or the wall-clock
//! [`OverlayInstance::tick`]) and forwards element events through
//! [`OverlayInstance::dispatch`]. Unmounting, explicitly or on drop, cancels
//! every task; a later `advance` is a no-op.

use crate::config::{Mode, PopupConfig};
use crate::effects::{twinkle_interval, ParticleField};
use crate::layout::builtin_registry;
use crate::media::{resolve_media, ResolvedMedia};
use crate::pipeline::{compose, resolve_overlay, RenderState, ResolvedOverlay};
use crate::policy::UrlPolicy;
use crate::settings::EngineSettings;
use marquee_animation::{TaskId, TaskScheduler};
use marquee_core::{Node, OverlayEvent};
use marquee_theme::{resolve_theme, SpecialEffect};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Duration;

/// Recurring work owned by an instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InstanceTask {
    RotateSlide,
    Twinkle,
}

type Callback = Box<dyn FnMut()>;

/// Caller hooks for close and action
pub struct OverlayCallbacks {
    on_close: Callback,
    on_action: Callback,
}

impl OverlayCallbacks {
    pub fn new() -> Self {
        Self {
            on_close: Box::new(|| {}),
            on_action: Box::new(|| {}),
        }
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Box::new(callback);
        self
    }

    pub fn on_action(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_action = Box::new(callback);
        self
    }
}

impl Default for OverlayCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OverlayCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayCallbacks").finish_non_exhaustive()
    }
}

/// One mounted overlay
pub struct OverlayInstance<P> {
    config: PopupConfig,
    mode: Mode,
    policy: P,
    settings: EngineSettings,
    callbacks: OverlayCallbacks,

    scheduler: TaskScheduler<InstanceTask>,
    rotation: Option<TaskId>,
    twinkle: Option<TaskId>,

    media: ResolvedMedia,
    slide_index: usize,
    hover_paused: bool,
    effect: SpecialEffect,
    particles: ParticleField,
    rng: StdRng,
    mounted: bool,
}

impl<P: UrlPolicy> OverlayInstance<P> {
    /// Mount with entropy-seeded particle placement.
    pub fn mount(
        config: PopupConfig,
        mode: Mode,
        policy: P,
        settings: EngineSettings,
        callbacks: OverlayCallbacks,
    ) -> Self {
        Self::mount_with_rng(config, mode, policy, settings, callbacks, StdRng::from_entropy())
    }

    /// Mount with a fixed seed; renders are then fully reproducible.
    pub fn mount_with_seed(
        config: PopupConfig,
        mode: Mode,
        policy: P,
        settings: EngineSettings,
        callbacks: OverlayCallbacks,
        seed: u64,
    ) -> Self {
        Self::mount_with_rng(config, mode, policy, settings, callbacks, StdRng::seed_from_u64(seed))
    }

    fn mount_with_rng(
        config: PopupConfig,
        mode: Mode,
        policy: P,
        settings: EngineSettings,
        callbacks: OverlayCallbacks,
        mut rng: StdRng,
    ) -> Self {
        let media = resolve_media(&config, &policy, &settings);
        let effect = resolve_theme(config.theme_id).special_effect;
        let particles = ParticleField::generate(effect, &mut rng);

        let mut instance = Self {
            config,
            mode,
            policy,
            settings,
            callbacks,
            scheduler: TaskScheduler::new(),
            rotation: None,
            twinkle: None,
            media,
            slide_index: 0,
            hover_paused: false,
            effect,
            particles,
            rng,
            mounted: true,
        };
        instance.start_rotation();
        instance.start_twinkle();
        tracing::debug!(
            theme = %instance.config.theme_id,
            mode = %instance.mode,
            tasks = instance.scheduler.task_count(),
            "overlay mounted"
        );
        instance
    }

    /// Slides are on screen: the media rotates and the theme renders it.
    fn shows_slides(&self) -> bool {
        self.media.rotates() && resolve_theme(self.config.theme_id).has_media_slot
    }

    fn start_rotation(&mut self) {
        if self.shows_slides() {
            let interval = self.settings.rotation_interval();
            self.rotation = Some(self.scheduler.schedule_interval(
                "slide-rotation",
                interval,
                InstanceTask::RotateSlide,
            ));
        }
    }

    fn stop_rotation(&mut self) {
        if let Some(id) = self.rotation.take() {
            self.scheduler.cancel(id);
        }
    }

    fn start_twinkle(&mut self) {
        if !(self.settings.effects_enabled && self.settings.twinkle) {
            return;
        }
        if let Some(interval) = twinkle_interval(self.effect) {
            self.twinkle = Some(self.scheduler.schedule_interval(
                "effect-twinkle",
                interval,
                InstanceTask::Twinkle,
            ));
        }
    }

    fn stop_twinkle(&mut self) {
        if let Some(id) = self.twinkle.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Resolver output for the current config.
    pub fn resolved(&self) -> ResolvedOverlay {
        resolve_overlay(&self.config, self.mode, &self.policy, &self.settings)
    }

    /// Render the current state.
    pub fn render(&self) -> Node {
        let resolved = self.resolved();
        compose(
            &self.config,
            &resolved,
            builtin_registry(),
            RenderState {
                slide_index: self.slide_index,
                particles: Some(&self.particles),
            },
        )
    }

    /// Advance time by `dt`. Returns whether visible state changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        let fired = self.scheduler.advance(dt);
        let mut changed = false;
        for (_, task) in fired {
            changed |= self.run_task(task);
        }
        changed
    }

    /// Advance by wall-clock time since the previous tick.
    pub fn tick(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let fired = self.scheduler.tick();
        let mut changed = false;
        for (_, task) in fired {
            changed |= self.run_task(task);
        }
        changed
    }

    fn run_task(&mut self, task: InstanceTask) -> bool {
        match task {
            InstanceTask::RotateSlide => {
                if self.hover_paused {
                    return false;
                }
                self.step_slide(1)
            }
            InstanceTask::Twinkle => self.particles.relocate_one(&mut self.rng),
        }
    }

    fn step_slide(&mut self, forward: isize) -> bool {
        let count = self.media.image_count();
        if count < 2 {
            return false;
        }
        let next = (self.slide_index as isize + forward).rem_euclid(count as isize) as usize;
        self.slide_index = next;
        true
    }

    /// Route an element event to callbacks or instance state.
    pub fn dispatch(&mut self, event: OverlayEvent) {
        if !self.mounted {
            tracing::debug!(%event, "event ignored after unmount");
            return;
        }
        match event {
            OverlayEvent::Close | OverlayEvent::Backdrop => (self.callbacks.on_close)(),
            OverlayEvent::Action => (self.callbacks.on_action)(),
            OverlayEvent::HoverStart => self.hover_paused = true,
            OverlayEvent::HoverEnd => self.hover_paused = false,
            OverlayEvent::NextSlide => {
                self.step_slide(1);
            }
            OverlayEvent::PrevSlide => {
                self.step_slide(-1);
            }
            OverlayEvent::GoToSlide(index) => {
                if index < self.media.image_count() {
                    self.slide_index = index;
                }
            }
        }
    }

    /// Replace the config.
    ///
    /// A change to the resolved media set, or to whether the theme shows
    /// media at all, cancels rotation, resets the slide and restarts rotation
    /// if the new set needs it. A change of effect
    /// regenerates particles and restarts twinkling.
    pub fn update_config(&mut self, config: PopupConfig) {
        if !self.mounted || config == self.config {
            return;
        }
        let media = resolve_media(&config, &self.policy, &self.settings);
        let theme = resolve_theme(config.theme_id);
        let effect = theme.special_effect;
        let slot_changed = theme.has_media_slot != resolve_theme(self.config.theme_id).has_media_slot;
        self.config = config;

        if media != self.media || slot_changed {
            tracing::debug!("media set changed, restarting rotation");
            self.stop_rotation();
            self.media = media;
            self.slide_index = 0;
            self.hover_paused = false;
            self.start_rotation();
        }

        if effect != self.effect {
            self.stop_twinkle();
            self.effect = effect;
            self.particles = ParticleField::generate(effect, &mut self.rng);
            self.start_twinkle();
        }
    }
}

impl<P> OverlayInstance<P> {
    /// Cancel every task and stop reacting to time and events.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.rotation = None;
        self.twinkle = None;
        let cancelled = self.scheduler.cancel_all();
        tracing::debug!(cancelled, "overlay unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn is_hover_paused(&self) -> bool {
        self.hover_paused
    }

    /// Number of live scheduled tasks.
    pub fn active_tasks(&self) -> usize {
        self.scheduler.task_count()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation
            .is_some_and(|id| self.scheduler.is_scheduled(id))
    }

    pub fn media(&self) -> &ResolvedMedia {
        &self.media
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }
}

impl<P> Drop for OverlayInstance<P> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImagePresentation;
    use crate::policy::AllowAll;
    use marquee_theme::ThemeId;
    use std::cell::Cell;
    use std::rc::Rc;

    fn slider_config() -> PopupConfig {
        PopupConfig {
            images: vec![
                "https://cdn.example.com/1.png".into(),
                "https://cdn.example.com/2.png".into(),
                "https://cdn.example.com/3.png".into(),
            ],
            ..Default::default()
        }
    }

    fn mount(config: PopupConfig) -> OverlayInstance<AllowAll> {
        OverlayInstance::mount_with_seed(
            config,
            Mode::Live,
            AllowAll,
            EngineSettings::default(),
            OverlayCallbacks::new(),
            42,
        )
    }

    #[test]
    fn test_rotation_advances_and_wraps() {
        let mut instance = mount(slider_config());
        assert!(instance.is_rotating());
        assert!(!instance.advance(Duration::from_millis(4_999)));
        assert!(instance.advance(Duration::from_millis(1)));
        assert_eq!(instance.slide_index(), 1);
        instance.advance(Duration::from_secs(10));
        assert_eq!(instance.slide_index(), 0);
    }

    #[test]
    fn test_single_image_does_not_rotate() {
        let mut instance = mount(PopupConfig {
            images: vec!["https://cdn.example.com/1.png".into()],
            ..Default::default()
        });
        assert!(!instance.is_rotating());
        assert_eq!(instance.active_tasks(), 0);
        assert!(!instance.advance(Duration::from_secs(30)));
    }

    #[test]
    fn test_hidden_slides_do_not_rotate() {
        let mut grid = mount(PopupConfig {
            image_presentation: ImagePresentation::Grid,
            ..slider_config()
        });
        assert!(!grid.is_rotating());
        assert!(!grid.advance(Duration::from_secs(30)));

        let mut terminal = mount(PopupConfig {
            theme_id: ThemeId::CreativeTerminal,
            ..slider_config()
        });
        assert!(!terminal.is_rotating());
        assert!(!terminal.advance(Duration::from_secs(30)));
        assert_eq!(terminal.slide_index(), 0);
    }

    #[test]
    fn test_theme_without_media_slot_stops_rotation() {
        let mut instance = mount(slider_config());
        assert!(instance.is_rotating());

        instance.update_config(PopupConfig {
            theme_id: ThemeId::CreativeTerminal,
            ..slider_config()
        });
        assert!(!instance.is_rotating());

        instance.update_config(slider_config());
        assert!(instance.is_rotating());
    }

    #[test]
    fn test_hover_pauses_without_cancelling() {
        let mut instance = mount(slider_config());
        instance.dispatch(OverlayEvent::HoverStart);
        instance.advance(Duration::from_secs(5));
        assert_eq!(instance.slide_index(), 0);
        assert!(instance.is_rotating());

        instance.dispatch(OverlayEvent::HoverEnd);
        instance.advance(Duration::from_secs(5));
        assert_eq!(instance.slide_index(), 1);
    }

    #[test]
    fn test_manual_navigation() {
        let mut instance = mount(slider_config());
        instance.dispatch(OverlayEvent::PrevSlide);
        assert_eq!(instance.slide_index(), 2);
        instance.dispatch(OverlayEvent::GoToSlide(1));
        assert_eq!(instance.slide_index(), 1);
        instance.dispatch(OverlayEvent::GoToSlide(9));
        assert_eq!(instance.slide_index(), 1);
    }

    #[test]
    fn test_callbacks_are_routed() {
        let closes = Rc::new(Cell::new(0));
        let actions = Rc::new(Cell::new(0));
        let callbacks = OverlayCallbacks::new()
            .on_close({
                let closes = closes.clone();
                move || closes.set(closes.get() + 1)
            })
            .on_action({
                let actions = actions.clone();
                move || actions.set(actions.get() + 1)
            });
        let mut instance = OverlayInstance::mount(
            PopupConfig::default(),
            Mode::Live,
            AllowAll,
            EngineSettings::default(),
            callbacks,
        );

        instance.dispatch(OverlayEvent::Close);
        instance.dispatch(OverlayEvent::Backdrop);
        instance.dispatch(OverlayEvent::Action);
        assert_eq!(closes.get(), 2);
        assert_eq!(actions.get(), 1);

        instance.unmount();
        instance.dispatch(OverlayEvent::Close);
        assert_eq!(closes.get(), 2);
    }

    #[test]
    fn test_media_change_restarts_rotation() {
        let mut instance = mount(slider_config());
        instance.advance(Duration::from_secs(5));
        assert_eq!(instance.slide_index(), 1);

        let mut next = slider_config();
        next.images.truncate(2);
        instance.update_config(next);
        assert_eq!(instance.slide_index(), 0);
        assert!(instance.is_rotating());

        instance.update_config(PopupConfig::default());
        assert!(!instance.is_rotating());
        assert_eq!(instance.active_tasks(), 0);
    }

    #[test]
    fn test_copy_change_keeps_rotation_state() {
        let mut instance = mount(slider_config());
        instance.advance(Duration::from_secs(5));
        let mut next = slider_config();
        next.title = "New headline".into();
        instance.update_config(next);
        assert_eq!(instance.slide_index(), 1);
        assert_eq!(instance.config().title, "New headline");
    }

    #[test]
    fn test_twinkle_task_for_sparkles() {
        let mut instance = mount(PopupConfig {
            theme_id: ThemeId::LuxuryGold,
            ..Default::default()
        });
        assert_eq!(instance.active_tasks(), 1);
        let before = instance.particles().clone();
        assert!(instance.advance(Duration::from_millis(1_800)));
        assert_ne!(&before, instance.particles());
    }

    #[test]
    fn test_twinkle_disabled_by_settings() {
        let instance = OverlayInstance::mount_with_seed(
            PopupConfig {
                theme_id: ThemeId::LuxuryGold,
                ..Default::default()
            },
            Mode::Live,
            AllowAll,
            EngineSettings {
                twinkle: false,
                ..Default::default()
            },
            OverlayCallbacks::new(),
            1,
        );
        assert_eq!(instance.active_tasks(), 0);
    }

    #[test]
    fn test_unmount_stops_everything() {
        let mut instance = mount(slider_config());
        instance.unmount();
        assert!(!instance.is_mounted());
        assert_eq!(instance.active_tasks(), 0);
        assert!(!instance.advance(Duration::from_secs(60)));
        assert_eq!(instance.slide_index(), 0);
    }
}
