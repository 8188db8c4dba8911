//! Action-conditional prop.
//!
//! The snack is shown only while eating, on the same tick the action
//! switches, and sways gently while shown.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::propvisibility::PropVisibility;
use crate::components::resttransform::RestTransform;
use crate::components::rotation::Rotation;
use crate::pose::PoseProfile;
use crate::resources::action::CurrentAction;
use crate::resources::propstate::PropState;
use crate::resources::worldtime::WorldTime;

pub fn prop_system(
    time: Res<WorldTime>,
    action: Res<CurrentAction>,
    mut prop_state: ResMut<PropState>,
    mut props: Query<(&RestTransform, &mut Rotation, &mut PropVisibility)>,
) {
    let profile = PoseProfile::from(action.get());
    let visible = profile.shows_prop();
    let sway = if visible {
        profile.prop_rotation(time.elapsed)
    } else {
        Vec3::ZERO
    };
    *prop_state = PropState { visible, sway };

    for (rest, mut rotation, mut visibility) in props.iter_mut() {
        visibility.visible = visible;
        rotation.radians = rest.rotation + sway;
    }
}
