use crate::{
    clock::AnimClock,
    foundation::{
        core::AnimTime,
        error::{WarpError, WarpResult},
    },
    source::{PixelSource, SourceDescriptor},
    spans::{Span, SpanTable},
    warp::{
        check_source_len,
        geometry::WarpGeometry,
        render_into,
        settings::{Executor, WarpSettings},
        style::WarpStyle,
    },
};

/// Counters for cache behaviour, useful for instrumentation and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarpStats {
    /// Times the pixel buffer was regenerated.
    pub regenerations: u64,
    /// Times the span table was rebuilt.
    pub span_builds: u64,
}

/// A time-varying warped view of an owned [`PixelSource`].
///
/// The generated buffer is keyed on the animation time it was built for: any accessor called with
/// a different time regenerates it first, and a regeneration always drops the span table built
/// from the previous buffer. Readers borrow the buffer, so it cannot change under them.
#[derive(Debug)]
pub struct WarpTexture<S: PixelSource> {
    source: S,
    desc: SourceDescriptor,
    geom: WarpGeometry,
    style: WarpStyle,
    exec: Executor,
    pixels: Option<Vec<u8>>,
    spans: Option<SpanTable>,
    scratch: Vec<u8>,
    gen_time: AnimTime,
    stats: WarpStats,
}

impl<S: PixelSource> WarpTexture<S> {
    /// Take ownership of `source` and prepare a warp with `settings`.
    pub fn new(source: S, settings: &WarpSettings) -> WarpResult<Self> {
        let desc = source.descriptor();
        desc.validate()?;
        let exec = Executor::from_settings(settings)?;
        tracing::debug!(
            width = desc.width,
            height = desc.height,
            style = %settings.style,
            executor = ?exec,
            "warp texture created"
        );
        Ok(Self {
            source,
            geom: WarpGeometry::from_descriptor(&desc),
            desc,
            style: settings.style,
            exec,
            pixels: None,
            spans: None,
            scratch: Vec::new(),
            gen_time: AnimTime(0),
            stats: WarpStats::default(),
        })
    }

    /// Sequential warp of the given style.
    pub fn with_style(source: S, style: WarpStyle) -> WarpResult<Self> {
        Self::new(source, &WarpSettings::with_style(style))
    }

    /// Metadata copied from the source at construction.
    pub fn descriptor(&self) -> &SourceDescriptor {
        &self.desc
    }

    /// Active distortion.
    pub fn style(&self) -> WarpStyle {
        self.style
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.desc.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.desc.height
    }

    /// `2^width_bits - 1`.
    pub fn width_mask(&self) -> u32 {
        self.desc.width_mask()
    }

    /// Time the current buffer was generated for.
    pub fn gen_time(&self) -> AnimTime {
        self.gen_time
    }

    /// Whether a generated buffer is currently held.
    pub fn is_loaded(&self) -> bool {
        self.pixels.is_some()
    }

    /// Cache counters.
    pub fn stats(&self) -> WarpStats {
        self.stats
    }

    /// Borrow the owned source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give the source back, dropping generated data.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Whether a read at `time` would see different pixels than the last generation.
    pub fn check_modified(&self, time: AnimTime) -> bool {
        time != self.gen_time
    }

    /// [`check_modified`](Self::check_modified) against a clock.
    pub fn check_modified_now<C: AnimClock + ?Sized>(&self, clock: &C) -> bool {
        self.check_modified(clock.now())
    }

    /// Full column-major buffer as of `time`.
    pub fn pixels(&mut self, time: AnimTime) -> WarpResult<&[u8]> {
        self.refresh(time)?;
        self.buffer()
    }

    /// [`pixels`](Self::pixels) at the clock's current time.
    pub fn pixels_now<C: AnimClock + ?Sized>(&mut self, clock: &C) -> WarpResult<&[u8]> {
        self.pixels(clock.now())
    }

    /// One column as of `time`. Out-of-range indices wrap around the width.
    pub fn column(&mut self, index: u32, time: AnimTime) -> WarpResult<&[u8]> {
        self.refresh(time)?;
        let range = self.geom.column_range(self.geom.x.wrap_index(index));
        Ok(&self.buffer()?[range])
    }

    /// One column and its opaque spans as of `time`.
    ///
    /// The span table is built on the first request after each regeneration.
    pub fn column_with_spans(
        &mut self,
        index: u32,
        time: AnimTime,
    ) -> WarpResult<(&[u8], &[Span])> {
        self.refresh(time)?;
        let x = self.geom.x.wrap_index(index);
        let Some(pixels) = self.pixels.as_deref() else {
            return Err(missing_buffer());
        };
        let (width, height) = (self.desc.width, self.desc.height);
        let stats = &mut self.stats;
        let spans = self.spans.get_or_insert_with(|| {
            stats.span_builds += 1;
            SpanTable::build(pixels, width, height)
        });
        Ok((&pixels[self.geom.column_range(x)], spans.column(x)))
    }

    /// Drop the generated buffer and spans, and ask the source to unload too.
    ///
    /// The generation time is kept; the next read regenerates because the buffer is gone.
    pub fn unload(&mut self) {
        if self.pixels.take().is_some() {
            tracing::debug!(gen_time = self.gen_time.0, "warp texture unloaded");
        }
        self.spans = None;
        self.source.unload();
    }

    fn buffer(&self) -> WarpResult<&[u8]> {
        self.pixels.as_deref().ok_or_else(missing_buffer)
    }

    fn refresh(&mut self, time: AnimTime) -> WarpResult<()> {
        if self.pixels.is_none() || time != self.gen_time {
            self.regenerate(time)?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self), fields(style = %self.style))]
    fn regenerate(&mut self, time: AnimTime) -> WarpResult<()> {
        let src = self.source.pixels()?;
        check_source_len(src, &self.geom)?;

        let n = self.geom.pixel_count();
        let out = self.pixels.get_or_insert_with(|| vec![0u8; n]);
        self.spans = None;
        if self.style == WarpStyle::Warp1 && self.scratch.is_empty() {
            self.scratch = vec![0u8; self.geom.width().max(self.geom.height())];
        }

        render_into(
            self.style,
            src,
            &self.geom,
            time,
            &mut self.scratch,
            out,
            &self.exec,
        );
        self.gen_time = time;
        self.stats.regenerations += 1;
        Ok(())
    }
}

fn missing_buffer() -> WarpError {
    WarpError::load("warp buffer missing after regeneration")
}

#[cfg(test)]
#[path = "../../tests/unit/warp/texture.rs"]
mod tests;
