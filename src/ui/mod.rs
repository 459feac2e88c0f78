//! UI plugin - camera and score display.

use bevy::prelude::*;

use crate::game::{SCORE_COLOR, SCORE_FONT_SIZE, SCORE_LEFT, SCORE_TOP, Score, ScoreText};

/// Plugin for the camera and the score overlay.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(Update, update_score_text);
    }
}

fn score_label(score: Score) -> String {
    format!("Score: {}", score.0)
}

/// Initial setup system - camera and score text.
fn setup_system(mut commands: Commands, score: Res<Score>) {
    commands.spawn(Camera2d);

    commands.spawn((
        Text::from(score_label(*score)),
        TextFont {
            font_size: SCORE_FONT_SIZE,
            ..default()
        },
        TextColor(SCORE_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(SCORE_TOP),
            left: Val::Px(SCORE_LEFT),
            ..default()
        },
        ScoreText,
    ));
}

/// System to update the score display.
fn update_score_text(score: Res<Score>, mut query: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }

    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(score_label(*score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_matches_score() {
        assert_eq!(score_label(Score(0)), "Score: 0");
        assert_eq!(score_label(Score(12)), "Score: 12");
    }

    #[test]
    fn score_text_follows_score_resource() {
        let mut app = App::new();
        app.init_resource::<Score>()
            .add_systems(Update, update_score_text);
        app.world_mut().spawn((Text::from("Score: 0"), ScoreText));

        app.world_mut().resource_mut::<Score>().0 = 3;
        app.update();

        let mut query = app.world_mut().query_filtered::<&Text, With<ScoreText>>();
        let text = query.single(app.world()).expect("one score text");
        assert_eq!(text.0, "Score: 3");
    }
}
