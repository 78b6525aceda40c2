use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

/// Iterations per full turn of the hue wheel.
const HUE_PERIOD: f32 = 512.0;
/// Controls how quickly brightness approaches 1.
const BRIGHTNESS_KNEE: f32 = 10.0;

/// Palette indexed by escape count, built once per iteration cap.
///
/// Entry `i` for `i < cap - 1` has hue `i / 512`, full saturation and
/// brightness `i / (i + 10)`, so low counts are dark and high counts bright.
/// The last entry and the colour for points that never escape are both
/// opaque black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourTable {
    colours: Vec<Colour>,
    terminal: Colour,
}

impl ColourTable {
    /// # Panics
    /// Panics if `iteration_cap` is zero.
    #[must_use]
    pub fn build(iteration_cap: u32) -> Self {
        assert!(iteration_cap > 0, "iteration cap must be greater than zero");

        let mut colours: Vec<Colour> = (0..iteration_cap - 1)
            .map(|i| {
                let i = i as f32;
                hsb_to_rgb(i / HUE_PERIOD, 1.0, i / (i + BRIGHTNESS_KNEE))
            })
            .collect();
        colours.push(Colour::OPAQUE_BLACK);

        Self {
            colours,
            terminal: Colour::OPAQUE_BLACK,
        }
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.colours.len() as u32
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// The colour of points that reached the cap without escaping.
    #[must_use]
    pub fn terminal_colour(&self) -> Colour {
        self.terminal
    }

    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> Colour {
        let cap = self.iteration_cap();

        if iterations == cap {
            return self.terminal;
        }

        self.colours[iterations.min(cap - 1) as usize]
    }
}

impl ColourMap for ColourTable {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        self.colour_for(iterations)
    }
}
