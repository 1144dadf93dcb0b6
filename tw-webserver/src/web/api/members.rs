use super::*;

#[get("/trips/<id>/members")]
pub fn get_members(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<Vec<json::TripMember>> {
    let memberships = usecases::list_members(&db.shared()?, account.email(), &Id::from(id))?;
    Ok(Json(memberships.into_iter().map(Into::into).collect()))
}

#[post("/trips/<id>/members", format = "application/json", data = "<invite>")]
pub fn post_member(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: String,
    invite: JsonResult<json::InviteMember>,
) -> Result<json::TripMember> {
    let invitee = invite?.into_inner().email.parse::<EmailAddress>()?;
    let membership = flows::invite_member(&db, &*notify.0, account.email(), &Id::from(id), &invitee)?;
    Ok(Json(membership.into()))
}

#[post("/trips/<id>/invitation", format = "application/json", data = "<answer>")]
pub fn post_invitation_response(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: String,
    answer: JsonResult<json::InvitationResponse>,
) -> Result<json::TripMember> {
    let accept = match answer?.into_inner().response {
        json::InvitationReply::Accept => true,
        json::InvitationReply::Decline => false,
    };
    let membership =
        flows::respond_to_invitation(&db, &*notify.0, account.email(), &Id::from(id), accept)?;
    Ok(Json(membership.into()))
}

#[delete("/trips/<id>/members/<email>")]
pub fn delete_member(
    db: sqlite::Connections,
    account: Account,
    id: String,
    email: String,
) -> Result<()> {
    flows::remove_member(&db, account.email(), &Id::from(id), &email.parse()?)?;
    Ok(Json(()))
}
