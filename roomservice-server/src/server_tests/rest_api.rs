use crate::server::rest_api::models::{RoomFormResponse, RoomResponse, ViewResponse};
use crate::server_tests::TestServer;
use crate::types::uuid::Uuid;
use reqwest::header::{COOKIE, LOCATION};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

fn location(response: &Response) -> &str {
	response
		.headers()
		.get(LOCATION)
		.expect("Response has no location")
		.to_str()
		.expect("Location is not a string")
}

async fn view(response: Response) -> ViewResponse {
	assert_eq!(StatusCode::OK, response.status());
	response.json().await.expect("Failed to deserialize view")
}

#[derive(Deserialize)]
struct ErrorResponse {
	r#type: String,
	status: u16,
}

#[tokio::test]
async fn should_render_all_rooms() {
	let server = TestServer::start().await;
	let room = server.create_room("A").await;

	let response = server
		.logged_in(server.client.get("/rooms"))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(
		ViewResponse::Index {
			rooms: vec![RoomResponse::from(room)]
		},
		view(response).await
	);
}

#[tokio::test]
async fn should_render_requested_room() {
	let server = TestServer::start().await;
	let room = server.create_room("A").await;

	let response = server
		.logged_in(server.client.get(&format!("/rooms/{}", room.id)))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(
		ViewResponse::Show {
			room: RoomResponse::from(room)
		},
		view(response).await
	);
}

#[tokio::test]
async fn should_render_form_for_new_room() {
	let server = TestServer::start().await;

	let response = server
		.logged_in(server.client.get("/rooms/new"))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(
		ViewResponse::New {
			room: RoomFormResponse::Unsaved { description: None },
			errors: Vec::new(),
		},
		view(response).await
	);
}

#[tokio::test]
async fn should_render_form_for_editing_room() {
	let server = TestServer::start().await;
	let room = server.create_room("A").await;

	let response = server
		.logged_in(server.client.get(&format!("/rooms/{}/edit", room.id)))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(
		ViewResponse::Edit {
			room: RoomFormResponse::Persisted {
				id: room.id,
				description: Some("A".to_owned()),
			},
			errors: Vec::new(),
		},
		view(response).await
	);
}

#[tokio::test]
async fn should_create_room_and_redirect_to_it() {
	let server = TestServer::start().await;

	let response = server
		.logged_in(server.client.post("/rooms"))
		.json(&json!({"room": {"description": "A"}}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::SEE_OTHER, response.status());
	assert_eq!(1, server.room_count().await);
	let room_id = location(&response)
		.strip_prefix("/rooms/")
		.and_then(|id| id.parse::<uuid::Uuid>().ok())
		.map(Uuid::from)
		.expect("Location doesn't point to a room");

	let response = server
		.logged_in(server.client.get(&format!("/rooms/{room_id}")))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(
		ViewResponse::Show {
			room: RoomResponse {
				id: room_id,
				description: "A".to_owned(),
			}
		},
		view(response).await
	);
}

#[tokio::test]
async fn should_rerender_new_form_for_invalid_room() {
	let server = TestServer::start().await;

	let response = server
		.logged_in(server.client.post("/rooms"))
		.json(&json!({"room": {"description": null}}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(
		ViewResponse::New {
			room: RoomFormResponse::Unsaved { description: None },
			errors: vec!["Description can't be blank.".to_owned()],
		},
		view(response).await
	);
	assert_eq!(0, server.room_count().await);
}

#[tokio::test]
async fn should_update_room_and_redirect_to_it() {
	let server = TestServer::start().await;
	let room = server.create_room("A").await;

	let response = server
		.logged_in(server.client.put(&format!("/rooms/{}", room.id)))
		.json(&json!({"room": {"description": "new description"}}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::SEE_OTHER, response.status());
	assert_eq!(format!("/rooms/{}", room.id), location(&response));
	let reloaded = server.reload(&room).await.expect("Room disappeared");
	assert_eq!("new description", reloaded.description);
}

#[tokio::test]
async fn should_keep_description_when_patching_without_it() {
	let server = TestServer::start().await;
	let room = server.create_room("A").await;

	let response = server
		.logged_in(server.client.patch(&format!("/rooms/{}", room.id)))
		.json(&json!({"room": {}}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::SEE_OTHER, response.status());
	assert_eq!(Some(room.clone()), server.reload(&room).await);
}

#[tokio::test]
async fn should_rerender_edit_form_for_invalid_update() {
	let server = TestServer::start().await;
	let room = server.create_room("A").await;

	let response = server
		.logged_in(server.client.put(&format!("/rooms/{}", room.id)))
		.json(&json!({"room": {"description": null}}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(
		ViewResponse::Edit {
			room: RoomFormResponse::Persisted {
				id: room.id,
				description: None,
			},
			errors: vec!["Description can't be blank.".to_owned()],
		},
		view(response).await
	);
	let reloaded = server.reload(&room).await.expect("Room disappeared");
	assert_eq!("A", reloaded.description);
}

#[tokio::test]
async fn should_destroy_room_and_redirect_to_rooms() {
	let server = TestServer::start().await;
	let room = server.create_room("A").await;

	let response = server
		.logged_in(server.client.delete(&format!("/rooms/{}", room.id)))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::SEE_OTHER, response.status());
	assert_eq!("/rooms", location(&response));
	assert_eq!(0, server.room_count().await);
}

#[tokio::test]
async fn should_respond_not_found_for_unknown_room() {
	let server = TestServer::start().await;

	let response = server
		.logged_in(server.client.get(&format!("/rooms/{}", Uuid::new_v4())))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let error = response
		.json::<ErrorResponse>()
		.await
		.expect("Failed to deserialize error");
	assert_eq!("room-not-found", error.r#type);
	assert_eq!(404, error.status);
}

#[tokio::test]
async fn should_reject_malformed_room_id() {
	let server = TestServer::start().await;

	let response = server
		.logged_in(server.client.get("/rooms/not-a-uuid"))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn should_reject_requests_without_session() {
	let server = TestServer::start().await;

	let response = server.client.get("/rooms").send().await.expect("Request failed.");

	assert_eq!(StatusCode::UNAUTHORIZED, response.status());
	let error = response
		.json::<ErrorResponse>()
		.await
		.expect("Failed to deserialize error");
	assert_eq!("authentication-failed", error.r#type);
}

#[tokio::test]
async fn should_accept_quoted_session_cookie() {
	let server = TestServer::start().await;

	let response = server
		.client
		.get("/rooms")
		.header(COOKIE, format!(r#"user_id="{}""#, server.user_id))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(ViewResponse::Index { rooms: Vec::new() }, view(response).await);
}

#[tokio::test]
async fn should_reject_session_of_unknown_user() {
	let server = TestServer::start().await;

	let response = server
		.client
		.post("/rooms")
		.header(COOKIE, format!("user_id={}", server.user_id + 1))
		.json(&json!({"room": {"description": "A"}}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::UNAUTHORIZED, response.status());
	assert_eq!(0, server.room_count().await);
}
