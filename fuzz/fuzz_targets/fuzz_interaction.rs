#![no_main]

use knd_dnd::{DndEngine, Projection};
use libfuzzer_sys::fuzz_target;

// Jedes Byte-Paar ist ein Event: Opcode + Item. Items >= 200 haben keinen Schlüssel.
fuzz_target!(|data: &[u8]| {
    let project: fn(&u8) -> Option<u8> = |item| (*item < 200).then_some(*item);
    let mut engine: DndEngine<u8, _> = DndEngine::with_resolver(Projection::new(project));

    for chunk in data.chunks(2) {
        let op = chunk[0];
        let item = chunk.get(1).copied().unwrap_or(0);

        // Fehler sind erwartete Eingaben (Duplikat, ungültige Deselektion, fehlender Schlüssel).
        let _ = match op % 11 {
            0 => engine.set_registry((0..item % 32).chain([item])),
            1 => engine.select(item),
            2 => engine.deselect(item),
            3 => engine.toggle(item),
            4 => engine.hover(item),
            5 => {
                engine.reset_hover();
                Ok(())
            }
            6 => {
                engine.set_shift_active(item % 2 == 0);
                Ok(())
            }
            7 => {
                engine.set_dragging(item % 2 == 0);
                Ok(())
            }
            8 => {
                engine.select_all();
                Ok(())
            }
            9 => {
                engine.deselect_all();
                Ok(())
            }
            _ => engine.set_registry(Vec::new()),
        };

        let map = engine.state_map();
        let registry = &engine.state().registry;
        assert_eq!(map.len(), registry.len());
        for (key, entry) in map.iter() {
            assert!(registry.contains(key));
            let selected = engine.selected_items().contains_key(key);
            assert_eq!(entry.state.is_selected, selected);
            assert!(!entry.state.is_dragging || (selected && engine.signals().is_dragging()));
        }
    }
});
