mod scene_sync;
