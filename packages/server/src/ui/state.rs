//! Server state shared by every handler.

use std::sync::Arc;

use crate::{
    domain::{EventRelay, MessagePusher, RoomRegistry},
    usecase::{
        ConnectSessionUseCase, DisconnectSessionUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
        JoinRoomUseCase, PublishEventUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// ConnectSessionUseCase（接続開始・個別返信）
    pub connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// JoinRoomUseCase（ルーム参加）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// DisconnectSessionUseCase（切断時の後始末）
    pub disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    /// PublishEventUseCase（書き込み側からの publish）
    pub publish_event_usecase: Arc<PublishEventUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}

impl AppState {
    /// Wire every use case to the given backend implementations
    pub fn with_backend(
        registry: Arc<dyn RoomRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        relay: Arc<dyn EventRelay>,
    ) -> Self {
        Self {
            connect_session_usecase: Arc::new(ConnectSessionUseCase::new(message_pusher.clone())),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                registry.clone(),
                message_pusher.clone(),
            )),
            disconnect_session_usecase: Arc::new(DisconnectSessionUseCase::new(
                registry.clone(),
                message_pusher,
            )),
            publish_event_usecase: Arc::new(PublishEventUseCase::new(relay)),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(registry.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(registry)),
        }
    }
}
