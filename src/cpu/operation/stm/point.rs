use crate::{
    cpu::datagram::{Body, GlobalHeader},
    cpu::params::*,
    fpga::params::*,
    CPUEmulator,
};

impl CPUEmulator {
    fn write_point_stm_payload(&mut self, src: &[u16], cnt: usize) {
        let mut dst = ((self.stm_cycle & POINT_STM_BUF_SEGMENT_SIZE_MASK) << 3) as u16;
        src.chunks_exact(4).take(cnt).for_each(|p| {
            self.bram_write(BRAM_SELECT_STM, dst, p[0]);
            self.bram_write(BRAM_SELECT_STM, dst + 1, p[1]);
            self.bram_write(BRAM_SELECT_STM, dst + 2, p[2]);
            self.bram_write(BRAM_SELECT_STM, dst + 3, p[3]);
            dst += 8;
        });
    }

    /// Appends focal points to the segmented STM buffer; each point occupies a
    /// stride-8 slot of which the first four words carry payload.
    pub(crate) fn write_point_stm(&mut self, header: &GlobalHeader, body: &Body) {
        let cpu_ctl = header.cpu_ctl();

        let (size, src) = if cpu_ctl.stm_begin() {
            self.stm_cycle = 0;
            self.bram_write(BRAM_SELECT_CONTROLLER, BRAM_ADDR_STM_ADDR_OFFSET, 0);

            let d = &body.data;
            let size = d[0] as u32;
            let freq_div = ((d[2] as u32) << 16) | d[1] as u32;
            let sound_speed = ((d[4] as u32) << 16) | d[3] as u32;

            self.bram_cpy(
                BRAM_SELECT_CONTROLLER,
                BRAM_ADDR_STM_FREQ_DIV_0,
                &freq_div as *const u32 as *const u16,
                std::mem::size_of::<u32>() >> 1,
            );
            self.bram_cpy(
                BRAM_SELECT_CONTROLLER,
                BRAM_ADDR_SOUND_SPEED_0,
                &sound_speed as *const u32 as *const u16,
                std::mem::size_of::<u32>() >> 1,
            );
            (size, &d[5..])
        } else {
            (body.data[0] as u32, &body.data[1..])
        };

        let segment_capacity = (self.stm_cycle & !POINT_STM_BUF_SEGMENT_SIZE_MASK)
            + POINT_STM_BUF_SEGMENT_SIZE
            - self.stm_cycle;
        if size <= segment_capacity {
            self.write_point_stm_payload(src, size as usize);
            self.stm_cycle += size;
        } else {
            self.write_point_stm_payload(src, segment_capacity as usize);
            self.stm_cycle += segment_capacity;

            self.bram_write(
                BRAM_SELECT_CONTROLLER,
                BRAM_ADDR_STM_ADDR_OFFSET,
                ((self.stm_cycle & !POINT_STM_BUF_SEGMENT_SIZE_MASK)
                    >> POINT_STM_BUF_SEGMENT_SIZE_WIDTH) as u16,
            );

            self.write_point_stm_payload(
                &src[segment_capacity as usize * 4..],
                (size - segment_capacity) as usize,
            );
            self.stm_cycle += size - segment_capacity;
        }

        if cpu_ctl.stm_end() {
            self.bram_write(
                BRAM_SELECT_CONTROLLER,
                BRAM_ADDR_STM_CYCLE,
                (self.stm_cycle.max(1) - 1) as u16,
            );
        }
    }
}
