//! Per-channel RGBA histogram and the stacked-bar layering used to draw it.

use serde::{Deserialize, Serialize};

use crate::image::TexelImage;

/// Bins per channel, one per 8-bit level.
pub const BINS: usize = 256;

/// Histogram data for R, G, B, and A channels (256 bins each).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramData {
    /// Bin counts for `[R, G, B, A]` channels. Each `Vec` has 256 entries.
    pub bins: [Vec<u32>; 4],
    /// Peak bin value across the R, G and B channels. Alpha is not drawn and
    /// does not contribute.
    pub peak: u32,
}

/// One filled segment of a stacked histogram bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarLayer {
    /// Bin count this layer reaches up to.
    pub count: u32,
    /// Channel whose count this is, `0..3` for R, G, B.
    pub channel: usize,
    /// `[R, G, B, A]` fill: white with every shorter channel removed.
    pub color: [u8; 4],
}

/// Compute the histogram of every texel in the image.
pub fn compute(image: &TexelImage<'_>) -> HistogramData {
    let mut bins = [
        vec![0u32; BINS],
        vec![0u32; BINS],
        vec![0u32; BINS],
        vec![0u32; BINS],
    ];

    for texel in image.texels() {
        for (c, level) in texel.to_rgba().into_iter().enumerate() {
            bins[c][level as usize] += 1;
        }
    }

    let peak = bins[..3]
        .iter()
        .flat_map(|b| b.iter().copied())
        .max()
        .unwrap_or(0);

    tracing::trace!(peak, "histogram computed");
    HistogramData { bins, peak }
}

impl HistogramData {
    /// Peak used for vertical scaling. Never zero, so a blank image scales
    /// to flat bars instead of dividing by zero.
    pub fn scale_peak(&self) -> u32 {
        self.peak.max(1)
    }

    /// Sum of one channel's bins.
    pub fn total(&self, channel: usize) -> u64 {
        self.bins[channel].iter().map(|&c| c as u64).sum()
    }

    /// R, G, B layers of one bin, shortest first.
    ///
    /// Ties are broken by channel order (R before G before B). The first
    /// layer is white; each later layer drops the channel of the layer before
    /// it, so the tallest layer shows only its own channel.
    pub fn stacked_bin(&self, bin: usize) -> [BarLayer; 3] {
        let mut keys = [0u64; 3];
        for (channel, key) in keys.iter_mut().enumerate() {
            *key = ((self.bins[channel][bin] as u64) << 2) | channel as u64;
        }
        keys.sort_unstable();

        let mut color = [255u8; 4];
        keys.map(|key| {
            let channel = (key & 3) as usize;
            let layer = BarLayer {
                count: (key >> 2) as u32,
                channel,
                color,
            };
            color[channel] = 0;
            layer
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texel::Texel;

    #[test]
    fn test_channel_counts_sum_to_pixel_count() {
        let texels: Vec<Texel> = (0..35u32)
            .map(|i| Texel::from_rgba(i as u8, (i * 7) as u8, (i * 13) as u8, 200))
            .collect();
        let image = TexelImage::new(7, 5, &texels).unwrap();
        let hist = compute(&image);
        for c in 0..4 {
            assert_eq!(hist.bins[c].len(), BINS);
            assert_eq!(hist.total(c), 35, "channel {c}");
        }
        assert_eq!(hist.bins[3][200], 35);
    }

    #[test]
    fn test_peak_ignores_alpha() {
        let texels: Vec<Texel> = (0..4u8).map(|i| Texel::from_rgba(i, i, i, 255)).collect();
        let image = TexelImage::new(2, 2, &texels).unwrap();
        let hist = compute(&image);
        assert_eq!(hist.bins[3][255], 4);
        assert_eq!(hist.peak, 1);
    }

    #[test]
    fn test_blank_image_scale_peak_is_nonzero() {
        let hist = HistogramData {
            bins: [vec![0; BINS], vec![0; BINS], vec![0; BINS], vec![0; BINS]],
            peak: 0,
        };
        assert_eq!(hist.scale_peak(), 1);
    }

    #[test]
    fn test_stacked_bin_orders_and_colors() {
        let mut hist = HistogramData {
            bins: [vec![0; BINS], vec![0; BINS], vec![0; BINS], vec![0; BINS]],
            peak: 0,
        };
        hist.bins[0][10] = 5;
        hist.bins[1][10] = 1;
        hist.bins[2][10] = 3;

        let layers = hist.stacked_bin(10);
        assert_eq!(layers.map(|l| l.count), [1, 3, 5]);
        assert_eq!(layers.map(|l| l.channel), [1, 2, 0]);
        assert_eq!(layers[0].color, [255, 255, 255, 255]);
        assert_eq!(layers[1].color, [255, 0, 255, 255]);
        assert_eq!(layers[2].color, [255, 0, 0, 255]);
    }

    #[test]
    fn test_stacked_bin_ties_break_by_channel() {
        let mut hist = HistogramData {
            bins: [vec![0; BINS], vec![0; BINS], vec![0; BINS], vec![0; BINS]],
            peak: 0,
        };
        hist.bins[0][0] = 4;
        hist.bins[1][0] = 4;
        hist.bins[2][0] = 4;
        let layers = hist.stacked_bin(0);
        assert_eq!(layers.map(|l| l.channel), [0, 1, 2]);
        assert_eq!(layers.map(|l| l.count), [4, 4, 4]);
    }
}
