use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::event::PlaySound;
use crate::event::SoundCue;

pub struct SoundPlugin;
impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySound>()
            .add_systems(Update, play_sounds);
    }
}

pub fn sound_for(cue: SoundCue, assets: &GameAssets) -> Handle<AudioSource> {
    match cue {
        SoundCue::Fire => assets.fire_sound.clone(),
        SoundCue::Hit => assets.hit_sound.clone(),
    }
}

// One-shot players, they despawn themselves once the clip is done
pub(crate) fn play_sounds(
    mut commands: Commands,
    mut cues: EventReader<PlaySound>,
    assets: Res<GameAssets>,
) {
    for PlaySound(cue) in cues.read() {
        commands.spawn((
            AudioPlayer::new(sound_for(*cue, &assets)),
            PlaybackSettings::DESPAWN,
        ));
    }
}
