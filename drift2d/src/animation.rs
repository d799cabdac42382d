//! Tick-driven sprite animation.

use crate::spritesheet::{FrameSource, SourceRect};

/// Frame-index state machine over a sequence of sprite-sheet frames.
///
/// The animation advances one frame every `speed_ticks + 1` calls to
/// [`Animation::update`]. Source rectangles are resolved once at
/// construction, so reading the current frame never touches the sheet.
#[derive(Clone, Debug)]
pub struct Animation {
    sequence: Vec<usize>,
    rects: Vec<SourceRect>,
    current: usize,
    tick_counter: u32,
    speed_ticks: u32,
    paused: bool,
    reverse: bool,
    repeating: bool,
    loop_completed: bool,
    changed: bool,
}

impl Animation {
    /// Build a repeating animation over `sequence`, a list of frame indices
    /// into `sheet`.
    ///
    /// # Panics
    /// If `sequence` is empty or names a frame the sheet does not have.
    pub fn new<S>(sheet: &S, sequence: Vec<usize>, speed_ticks: u32) -> Self
    where
        S: FrameSource + ?Sized,
    {
        assert!(!sequence.is_empty(), "animation frame sequence must not be empty");
        let rects = sequence
            .iter()
            .map(|&frame| {
                sheet.frame_rect(frame).unwrap_or_else(|| {
                    panic!(
                        "animation frame {frame} is out of range for a sheet of {} frames",
                        sheet.frame_count()
                    )
                })
            })
            .collect();

        Self {
            sequence,
            rects,
            current: 0,
            tick_counter: 0,
            speed_ticks,
            paused: false,
            reverse: false,
            repeating: true,
            loop_completed: false,
            changed: true,
        }
    }

    /// Choose whether the animation loops or stops on its final frame.
    #[must_use]
    pub fn with_repeat(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    /// Start playing backwards from the last frame.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self.current = self.last_index();
        self
    }

    /// Advance the animation by one tick.
    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        self.loop_completed = false;

        self.tick_counter += 1;
        if self.tick_counter <= self.speed_ticks {
            return;
        }
        self.tick_counter = 0;

        let previous = self.current;
        let last = self.last_index();
        if self.reverse {
            if self.current == 0 {
                self.loop_completed = true;
                if self.repeating {
                    self.current = last;
                }
            } else {
                self.current -= 1;
            }
        } else if self.current == last {
            self.loop_completed = true;
            if self.repeating {
                self.current = 0;
            }
        } else {
            self.current += 1;
        }

        if self.current != previous {
            self.changed = true;
        }
        if self.loop_completed && !self.repeating {
            self.paused = true;
        }
    }

    /// Ticks to wait between frames.
    pub fn set_speed(&mut self, ticks: u32) {
        self.speed_ticks = ticks;
    }

    pub fn speed(&self) -> u32 {
        self.speed_ticks
    }

    pub fn set_repeating(&mut self, repeating: bool) {
        self.repeating = repeating;
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    pub fn set_reverse(&mut self) {
        self.reverse = true;
    }

    pub fn set_forward(&mut self) {
        self.reverse = false;
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Jump to position `index` in the frame sequence.
    ///
    /// # Panics
    /// If `index` is not a valid position in the sequence.
    pub fn set_frame(&mut self, index: usize) {
        assert!(
            index < self.sequence.len(),
            "frame {index} is out of range for a sequence of {} frames",
            self.sequence.len()
        );
        self.current = index;
        self.tick_counter = 0;
        self.changed = true;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Resume playback. A finished non-repeating animation rewinds first.
    pub fn play(&mut self) {
        if self.is_finished() {
            let start = if self.reverse { self.last_index() } else { 0 };
            self.set_frame(start);
            self.loop_completed = false;
        }
        self.paused = false;
    }

    /// Pause and rewind to the first frame.
    pub fn stop(&mut self) {
        self.paused = true;
        self.loop_completed = false;
        self.tick_counter = 0;
        if self.current != 0 {
            self.current = 0;
            self.changed = true;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True only on the tick the sequence ran past its end.
    pub fn loop_completed(&self) -> bool {
        self.loop_completed
    }

    /// A non-repeating animation that has reached its terminal frame.
    pub fn is_finished(&self) -> bool {
        !self.repeating && self.paused && self.loop_completed
    }

    /// Position within the frame sequence.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Sheet frame index currently shown.
    pub fn current_sheet_frame(&self) -> usize {
        self.sequence[self.current]
    }

    pub fn current_frame_rect(&self) -> SourceRect {
        self.rects[self.current]
    }

    /// Returns the current rectangle if the frame changed since the last call.
    pub fn take_changed_rect(&mut self) -> Option<SourceRect> {
        std::mem::take(&mut self.changed).then(|| self.current_frame_rect())
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    fn last_index(&self) -> usize {
        self.sequence.len() - 1
    }
}
