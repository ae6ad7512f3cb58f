pub mod user;

use crate::helpers::JsonResponse;
use crate::models;

/// Admin screens gate on the 999 sentinel exactly. No level orders above it,
/// but an explicit equality check keeps a future sentinel value from
/// inheriting admin rights through ordering.
pub(crate) fn ensure_admin(user: &models::AuthUser) -> Result<(), actix_web::Error> {
    if user.entitlement.level != models::Level::Root {
        return Err(JsonResponse::<()>::build().forbidden("access denied"));
    }
    Ok(())
}
