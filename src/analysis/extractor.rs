use crate::common::color::{Color, BLACK, WHITE};
use image::{DynamicImage, GenericImageView};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;

// Sampling happens on a thumbnail; anything bigger buys nothing for
// dominant-color purposes.
const SAMPLE_DIM: u32 = 100;

/// Reduces an image to its representative colors via seeded k-means over a
/// thumbnail. Results are ordered by cluster population, largest first.
#[derive(Debug, Clone)]
pub struct ColorExtractor {
    k: usize,
    seed: u64,
    restarts: usize,
    max_iterations: usize,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self {
            k: 5,
            seed: 42,
            restarts: 3,
            max_iterations: 20,
        }
    }
}

impl ColorExtractor {
    pub fn new(k: usize, seed: u64, restarts: usize, max_iterations: usize) -> Self {
        Self {
            k: k.max(1),
            seed,
            restarts: restarts.max(1),
            max_iterations: max_iterations.max(1),
        }
    }

    /// Fallback pair used whenever there is nothing to cluster.
    pub fn fallback_colors() -> Vec<Color> {
        vec![BLACK, WHITE]
    }

    pub fn extract(&self, image: &DynamicImage) -> Vec<Color> {
        // Downscale only; upscaling a small image would interpolate colors
        // that were never there.
        let rgb = if image.width() > SAMPLE_DIM || image.height() > SAMPLE_DIM {
            image.thumbnail(SAMPLE_DIM, SAMPLE_DIM).to_rgb8()
        } else {
            image.to_rgb8()
        };
        let pixels: Vec<[f32; 3]> = rgb
            .pixels()
            .map(|p| [p[0] as f32, p[1] as f32, p[2] as f32])
            .collect();

        if pixels.is_empty() {
            return Self::fallback_colors();
        }

        let mut counts: HashMap<(u8, u8, u8), usize> = HashMap::new();
        for p in &pixels {
            *counts
                .entry((p[0] as u8, p[1] as u8, p[2] as u8))
                .or_insert(0) += 1;
        }

        // With k or fewer distinct colors clustering would only produce
        // duplicate centroids; the histogram already is the answer.
        if counts.len() <= self.k {
            let mut sorted: Vec<_> = counts.into_iter().collect();
            sorted.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
            return sorted
                .into_iter()
                .map(|((r, g, b), _)| Color::new(r, g, b))
                .collect();
        }

        let distinct: Vec<[f32; 3]> = counts
            .keys()
            .map(|&(r, g, b)| [r as f32, g as f32, b as f32])
            .collect();

        self.kmeans(&pixels, &distinct)
    }

    fn kmeans(&self, pixels: &[[f32; 3]], distinct: &[[f32; 3]]) -> Vec<Color> {
        let mut best: Option<(f32, Vec<([f32; 3], usize)>)> = None;

        for restart in 0..self.restarts {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(restart as u64));
            let centroids = Self::initial_centroids(&mut rng, distinct, self.k);
            let (clusters, inertia) = self.run_once(pixels, centroids);
            if best.as_ref().map(|(i, _)| inertia < *i).unwrap_or(true) {
                best = Some((inertia, clusters));
            }
        }

        let (_, mut clusters) = best.unwrap_or((0.0, Vec::new()));
        clusters.retain(|(_, size)| *size > 0);
        clusters.sort_by_key(|&(_, size)| std::cmp::Reverse(size));

        let mut colors: Vec<Color> = Vec::with_capacity(clusters.len());
        for (centroid, _) in clusters {
            let color = Color::new(
                centroid[0].round() as u8,
                centroid[1].round() as u8,
                centroid[2].round() as u8,
            );
            if !colors.contains(&color) {
                colors.push(color);
            }
        }

        if colors.is_empty() {
            Self::fallback_colors()
        } else {
            colors
        }
    }

    // Partial Fisher-Yates over the distinct colors, so every initial
    // centroid is unique.
    fn initial_centroids(rng: &mut StdRng, distinct: &[[f32; 3]], k: usize) -> Vec<[f32; 3]> {
        let mut pool: Vec<[f32; 3]> = distinct.to_vec();
        let k = k.min(pool.len());
        for i in 0..k {
            let j = rng.random_range(i..pool.len());
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }

    fn run_once(
        &self,
        pixels: &[[f32; 3]],
        mut centroids: Vec<[f32; 3]>,
    ) -> (Vec<([f32; 3], usize)>, f32) {
        let mut assignments = vec![0usize; pixels.len()];

        for _ in 0..self.max_iterations {
            let mut changed = false;
            for (i, pixel) in pixels.iter().enumerate() {
                let nearest = Self::nearest_centroid(pixel, &centroids);
                if assignments[i] != nearest {
                    assignments[i] = nearest;
                    changed = true;
                }
            }

            let mut sums = vec![[0.0f32; 3]; centroids.len()];
            let mut sizes = vec![0usize; centroids.len()];
            for (pixel, &cluster) in pixels.iter().zip(&assignments) {
                sums[cluster][0] += pixel[0];
                sums[cluster][1] += pixel[1];
                sums[cluster][2] += pixel[2];
                sizes[cluster] += 1;
            }
            for (cluster, sum) in sums.iter().enumerate() {
                if sizes[cluster] > 0 {
                    let n = sizes[cluster] as f32;
                    centroids[cluster] = [sum[0] / n, sum[1] / n, sum[2] / n];
                }
            }

            if !changed {
                break;
            }
        }

        let mut sizes = vec![0usize; centroids.len()];
        let mut inertia = 0.0f32;
        for (pixel, &cluster) in pixels.iter().zip(&assignments) {
            sizes[cluster] += 1;
            inertia += Self::distance_squared(pixel, &centroids[cluster]);
        }

        let clusters = centroids.into_iter().zip(sizes).collect();
        (clusters, inertia)
    }

    fn nearest_centroid(pixel: &[f32; 3], centroids: &[[f32; 3]]) -> usize {
        let mut nearest = 0;
        let mut nearest_distance = f32::MAX;
        for (i, centroid) in centroids.iter().enumerate() {
            let distance = Self::distance_squared(pixel, centroid);
            if distance < nearest_distance {
                nearest = i;
                nearest_distance = distance;
            }
        }
        nearest
    }

    fn distance_squared(a: &[f32; 3], b: &[f32; 3]) -> f32 {
        let dr = a[0] - b[0];
        let dg = a[1] - b[1];
        let db = a[2] - b[2];
        dr * dr + dg * dg + db * db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            width,
            height,
            Rgb(rgb),
        ))
    }

    #[test]
    fn solid_image_yields_its_color_first() {
        let extractor = ColorExtractor::default();
        let colors = extractor.extract(&solid(32, 32, [255, 0, 0]));
        assert_eq!(colors[0], Color::new(255, 0, 0));
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn two_tone_image_orders_by_population() {
        // 3/4 red, 1/4 blue.
        let mut buffer = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(32, 32, Rgb([255, 0, 0]));
        for y in 0..8 {
            for x in 0..32 {
                buffer.put_pixel(x, y, Rgb([0, 0, 255]));
            }
        }
        let extractor = ColorExtractor::default();
        let colors = extractor.extract(&DynamicImage::ImageRgb8(buffer));
        assert_eq!(colors[0], Color::new(255, 0, 0));
        assert!(colors.contains(&Color::new(0, 0, 255)));
    }

    #[test]
    fn zero_pixel_image_falls_back_to_black_and_white() {
        let empty = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::new(0, 0));
        let extractor = ColorExtractor::default();
        assert_eq!(extractor.extract(&empty), vec![BLACK, WHITE]);
    }

    #[test]
    fn extraction_is_reproducible() {
        // Noisy gradient with far more than k distinct colors.
        let buffer = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_fn(64, 64, |x, y| {
            Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8])
        });
        let img = DynamicImage::ImageRgb8(buffer);
        let extractor = ColorExtractor::default();
        assert_eq!(extractor.extract(&img), extractor.extract(&img));
    }

    #[test]
    fn never_returns_more_than_k_colors() {
        let buffer = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_fn(64, 64, |x, y| {
            Rgb([(x * 3) as u8, (y * 3) as u8, (x ^ y) as u8])
        });
        let extractor = ColorExtractor::default();
        let colors = extractor.extract(&DynamicImage::ImageRgb8(buffer));
        assert!(!colors.is_empty());
        assert!(colors.len() <= 5);
    }
}
