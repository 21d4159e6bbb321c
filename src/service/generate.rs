use crate::analysis::{harmony, scoring, Combiner, TextGenerator};
use crate::common::color::Color;
use crate::common::tags::{ClothingType, ColorPreference, Occasion};
use crate::config::Settings;
use crate::error::{AppError, ValidationError};
use crate::service::sequence::RequestSequence;
use crate::service::types::{CombinationDto, GenerateRequest, GenerateResponse, ImageDto};
use crate::wardrobe::{WardrobeHandle, WardrobeItem};
use futures::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;
use tracing::{debug, info};

/// A finished generation plus its place in the request sequence. `current`
/// is false when a newer request completed first; such a response should
/// not be displayed.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub response: GenerateResponse,
    pub ticket: u64,
    pub current: bool,
}

/// Builds scored outfit combinations from wardrobe items. Selection is a
/// positional sliding window; it does not try to pair compatible clothing
/// types.
pub struct GenerateService {
    wardrobe: WardrobeHandle,
    combiner: Combiner,
    text: TextGenerator,
    sequence: Arc<RequestSequence>,
    harmony_colors_per_item: usize,
    min_items: usize,
}

impl GenerateService {
    pub fn new(
        settings: &Settings,
        wardrobe: WardrobeHandle,
        sequence: Arc<RequestSequence>,
    ) -> Self {
        Self {
            wardrobe,
            combiner: Combiner::new(
                settings.max_combinations,
                settings.min_combination_items,
                settings.max_combination_items,
            ),
            text: TextGenerator::default(),
            sequence,
            harmony_colors_per_item: settings.harmony_colors_per_item,
            min_items: settings.min_combination_items,
        }
    }

    fn build_combinations(
        items: &[WardrobeItem],
        windows: Vec<Vec<usize>>,
        occasion: Occasion,
        preferred_type: Option<ClothingType>,
        color_preference: Option<&ColorPreference>,
        text: &TextGenerator,
        harmony_colors_per_item: usize,
    ) -> Vec<CombinationDto> {
        let mut combinations: Vec<CombinationDto> = windows
            .into_iter()
            .map(|window| {
                let members: Vec<&WardrobeItem> = window.iter().map(|&i| &items[i]).collect();
                let palette: Vec<Color> = members
                    .iter()
                    .flat_map(|m| m.colors.iter().take(harmony_colors_per_item).copied())
                    .collect();
                let label = harmony::classify(&palette);
                let score = scoring::score(label, occasion);
                let dominant_names: Vec<String> = members
                    .iter()
                    .filter_map(|m| m.color_names.first().cloned())
                    .collect();
                CombinationDto {
                    id: 0,
                    images: members.iter().map(|m| ImageDto::from_item(m)).collect(),
                    score,
                    rating: scoring::rating(score),
                    harmony: label,
                    style_notes: text.style_notes(occasion, preferred_type),
                    color_analysis: text.color_analysis(label, &dominant_names),
                    recommendation: text.recommendation(
                        label,
                        occasion,
                        preferred_type,
                        color_preference,
                    ),
                }
            })
            .collect();

        combinations.sort_by(|a, b| b.score.cmp(&a.score));
        for (i, combination) in combinations.iter_mut().enumerate() {
            combination.id = i + 1;
        }
        combinations
    }
}

impl Service<GenerateRequest> for GenerateService {
    type Response = GenerateOutcome;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), AppError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: GenerateRequest) -> Self::Future {
        let ticket = self.sequence.issue();
        let wardrobe = self.wardrobe.clone();
        let combiner = self.combiner.clone();
        let text = self.text.clone();
        let sequence = self.sequence.clone();
        let harmony_colors_per_item = self.harmony_colors_per_item;
        let min_items = self.min_items;

        Box::pin(async move {
            // Validate before touching the wardrobe at all.
            if request.images.len() < min_items {
                return Err(ValidationError::NotEnoughImages {
                    required: min_items,
                    actual: request.images.len(),
                }
                .into());
            }

            let requested = request.images.len();
            let items = wardrobe.get_items(request.images).await?;
            if items.len() < requested {
                debug!(
                    "{} requested image(s) are no longer in the working set",
                    requested - items.len()
                );
            }
            if items.len() < min_items {
                return Err(ValidationError::NotEnoughImages {
                    required: min_items,
                    actual: items.len(),
                }
                .into());
            }

            let occasion = Occasion::parse(&request.occasion);
            let preferred_type = request.clothing_type.as_deref().map(ClothingType::parse);
            let color_preference = request
                .color_preference
                .filter(|p| !p.trim().is_empty())
                .map(ColorPreference);

            let windows = combiner.select_windows(items.len());
            let combinations = Self::build_combinations(
                &items,
                windows,
                occasion,
                preferred_type,
                color_preference.as_ref(),
                &text,
                harmony_colors_per_item,
            );

            let total_combinations = combinations.len();
            let current = sequence.commit(ticket);
            info!(
                "Generated {} combination(s) for {} item(s), occasion {}",
                total_combinations,
                items.len(),
                occasion
            );

            Ok(GenerateOutcome {
                response: GenerateResponse {
                    success: true,
                    combinations,
                    total_combinations,
                },
                ticket,
                current,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::ImageContext;
    use crate::wardrobe::Wardrobe;
    use uuid::Uuid;

    fn item(name: &str, colors: Vec<Color>) -> WardrobeItem {
        let mut context = ImageContext::new(name.to_string(), None);
        context.colors = colors;
        WardrobeItem::from_context(&context, "png")
    }

    async fn service_with_items(
        items: Vec<WardrobeItem>,
    ) -> (GenerateService, Vec<Uuid>, tokio::task::JoinHandle<()>) {
        let settings = Settings::default();
        let (handle, task) = Wardrobe::spawn(settings.wardrobe_buffer_size);
        let mut ids = Vec::new();
        for item in items {
            ids.push(handle.add_item(item).await.unwrap());
        }
        let service =
            GenerateService::new(&settings, handle, Arc::new(RequestSequence::new()));
        (service, ids, task)
    }

    fn request(ids: &[Uuid], occasion: &str) -> GenerateRequest {
        GenerateRequest {
            images: ids.to_vec(),
            occasion: occasion.to_string(),
            clothing_type: None,
            color_preference: None,
        }
    }

    #[tokio::test]
    async fn empty_request_fails_validation_without_compute() {
        let (mut service, _, task) = service_with_items(vec![]).await;
        let error = service.call(request(&[], "casual")).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Validation(ValidationError::NotEnoughImages {
                required: 2,
                actual: 0
            })
        ));
        task.abort();
    }

    #[tokio::test]
    async fn stale_ids_failing_resolution_also_fail_validation() {
        let (mut service, _, task) = service_with_items(vec![]).await;
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let error = service.call(request(&ids, "casual")).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Validation(ValidationError::NotEnoughImages { actual: 0, .. })
        ));
        task.abort();
    }

    #[tokio::test]
    async fn red_and_cyan_items_read_complementary() {
        let items = vec![
            item("red_shirt.png", vec![Color::new(255, 0, 0)]),
            item("cyan_pants.png", vec![Color::new(0, 255, 255)]),
        ];
        let (mut service, ids, task) = service_with_items(items).await;
        let outcome = service.call(request(&ids, "party")).await.unwrap();
        assert!(outcome.current);
        assert!(outcome.response.success);
        for combination in &outcome.response.combinations {
            assert_eq!(combination.harmony, harmony::Harmony::Complementary);
            assert_eq!(combination.score, 90);
            assert_eq!(combination.rating, 5);
        }
        task.abort();
    }

    #[tokio::test]
    async fn combinations_are_sorted_by_score_with_ordinal_ids() {
        let items = vec![
            item("a.png", vec![Color::new(255, 0, 0)]),
            item("b.png", vec![Color::new(0, 255, 255)]),
            item("c.png", vec![Color::new(255, 128, 0)]),
            item("d.png", vec![Color::new(255, 255, 0)]),
        ];
        let (mut service, ids, task) = service_with_items(items).await;
        let outcome = service.call(request(&ids, "casual")).await.unwrap();
        let response = outcome.response;
        assert_eq!(response.total_combinations, response.combinations.len());
        let scores: Vec<u32> = response.combinations.iter().map(|c| c.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
        let ordinals: Vec<usize> = response.combinations.iter().map(|c| c.id).collect();
        assert_eq!(ordinals, (1..=response.combinations.len()).collect::<Vec<_>>());
        task.abort();
    }

    #[tokio::test]
    async fn scores_stay_inside_the_clamp_band() {
        let items = vec![
            item("a.png", vec![Color::new(255, 0, 0), Color::new(0, 255, 0)]),
            item("b.png", vec![Color::new(150, 0, 255)]),
            item("c.png", vec![Color::new(255, 255, 0)]),
        ];
        let (mut service, ids, task) = service_with_items(items).await;
        for occasion in ["casual", "formal", "party", "business", "sport", "gala"] {
            let outcome = service.call(request(&ids, occasion)).await.unwrap();
            for combination in &outcome.response.combinations {
                assert!((65..=95).contains(&combination.score));
                assert!((1..=5).contains(&combination.rating));
            }
        }
        task.abort();
    }

    #[tokio::test]
    async fn preferred_type_shows_up_in_the_text() {
        let items = vec![
            item("a.png", vec![Color::new(255, 0, 0)]),
            item("b.png", vec![Color::new(0, 255, 255)]),
        ];
        let (mut service, ids, task) = service_with_items(items).await;
        let request = GenerateRequest {
            images: ids,
            occasion: "formal".to_string(),
            clothing_type: Some("dress".to_string()),
            color_preference: Some("cool blues".to_string()),
        };
        let outcome = service.call(request).await.unwrap();
        let combination = &outcome.response.combinations[0];
        assert!(combination.style_notes.contains("dress"));
        assert!(combination.recommendation.contains("cool blues"));
        task.abort();
    }
}
